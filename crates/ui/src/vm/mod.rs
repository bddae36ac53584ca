mod game_vm;

pub use game_vm::{GameIntent, GameVm};
