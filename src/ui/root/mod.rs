mod intent;
mod reducer;
mod state;

pub use intent::RootIntent;
pub use reducer::RootReducer;
pub use state::RootState;
