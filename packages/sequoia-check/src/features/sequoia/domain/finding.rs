//! Sequoia finding domain model

use std::fmt;

use serde::{Deserialize, Serialize};

/// One confirmed match: an unsigned value cast to signed, passed at
/// `arg_index`, and used in pointer arithmetic inside the callee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub caller: String,
    pub callee: String,
    pub arg_index: usize,
}

impl Finding {
    pub fn new(caller: impl Into<String>, callee: impl Into<String>, arg_index: usize) -> Self {
        Self {
            caller: caller.into(),
            callee: callee.into(),
            arg_index,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Call to `{}` in `{}` passes an unsigned value to a signed argument \
             (index `{}`) and then uses it in pointer arithmetic.",
            self.callee, self.caller, self.arg_index
        )
    }
}
