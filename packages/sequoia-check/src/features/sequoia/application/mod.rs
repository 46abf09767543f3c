mod check_sequoia;

pub use check_sequoia::CheckSequoiaUseCase;
