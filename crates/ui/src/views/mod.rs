mod game;

pub use game::GameView;
