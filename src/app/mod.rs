//! Record store use cases.

mod guideline;
mod interaction;
mod quiz;
mod research;

pub use guideline::{guideline_create, guideline_list, GuidelineCreateReq, GuidelineDto};
pub use interaction::{interaction_track, InteractionDto, InteractionTrackReq};
pub use quiz::{quiz_list, QuizQuestionDto};
pub use research::{research_list, ResearchArticleDto};
