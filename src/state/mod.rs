pub mod interaction;
pub mod observers;

pub use interaction::{Interaction, InteractionKey, InteractionTable};
pub use observers::{Listener, Observers};
