mod game;

pub use game::GameView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
