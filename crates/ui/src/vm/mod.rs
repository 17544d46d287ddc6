mod board_vm;
mod message_vm;

pub use board_vm::{BoardVm, map_board};
pub use message_vm::{GameMessage, MessageKind};
