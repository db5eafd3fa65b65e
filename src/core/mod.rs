// core logic - concern detection, reply composition, session state

mod compose;
mod concern;
mod resources;
mod session;
mod transcript;

pub use compose::compose;
pub use concern::{CRISIS_KEYWORDS, Concern, KEYWORDS};
pub use resources::{
    ANGER, ANXIETY, CRISIS, CRISIS_OPENING, CRISIS_PROMPT, CRISIS_REMINDER, DEPRESSION,
    EXIT_KEYWORDS, FAREWELLS, FOLLOW_UPS, GENERAL, GREETINGS, GRIEF, LONELINESS, SUPPORTIVE,
    TRAUMA,
};
pub use session::{DEFAULT_BOT_NAME, Reply, ReplyKind, Session, wants_exit};
pub use transcript::{Entry, ExportFormat, Speaker, Transcript, default_filename};
