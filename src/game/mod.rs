//! Game layer - the merge-grid rules and the aggregate they act on

pub mod log;
pub mod merge;
pub mod progress;
pub mod selection;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tasks;

pub use log::{GameLog, LogEntry, LogKind};
pub use merge::{MergeDecision, MergeOutcome};
pub use progress::{GameProgress, HauntingView};
pub use selection::{ClickOutcome, InteractionController, Selection};
pub use session::{CompletionOutcome, GameSession};
pub use state::{Fulfilment, GameState};
pub use tasks::{initial_tasks, Task, TaskSeed};
