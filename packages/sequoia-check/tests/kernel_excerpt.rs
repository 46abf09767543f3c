//! End-to-end run over the kernel seq_buf excerpt
//!
//! The fixture models `seq_buf_path` obtaining an unsigned `size_t` buffer
//! size, implicitly casting it to the signed `buflen` parameter of `d_path`,
//! which computes `buf + buflen`. The rule must flag exactly that call, at
//! argument index 2, and skip the unresolvable `mangle_path` call.

use pretty_assertions::assert_eq;
use sequoia_check::{BufferSink, CheckSequoiaUseCase, Finding, Module};

const FIXTURE: &str = include_str!("fixtures/seq_buf_path.json");

#[test]
fn test_seq_buf_path_flagged() {
    let module = Module::from_json_str(FIXTURE).unwrap();
    let mut sink = BufferSink::new();

    let count = CheckSequoiaUseCase::new().execute(&module, &mut sink);

    assert_eq!(count, 1);
    assert_eq!(
        sink.findings,
        vec![Finding::new("seq_buf_path", "d_path", 2)]
    );
    assert_eq!(
        sink.lines(),
        vec![
            "Call to `d_path` in `seq_buf_path` passes an unsigned value to a signed argument \
             (index `2`) and then uses it in pointer arithmetic."
                .to_string()
        ]
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let module = Module::from_json_str(FIXTURE).unwrap();
    let usecase = CheckSequoiaUseCase::new();

    let mut first = BufferSink::new();
    let mut second = BufferSink::new();
    usecase.execute(&module, &mut first);
    usecase.execute(&module, &mut second);

    assert_eq!(first.findings, second.findings);
}

#[test]
fn test_module_round_trip_preserves_findings() {
    let module = Module::from_json_str(FIXTURE).unwrap();
    let reloaded = Module::from_json_str(&module.to_json_string().unwrap()).unwrap();

    let mut sink = BufferSink::new();
    CheckSequoiaUseCase::new().execute(&reloaded, &mut sink);

    assert_eq!(sink.findings, vec![Finding::new("seq_buf_path", "d_path", 2)]);
}
