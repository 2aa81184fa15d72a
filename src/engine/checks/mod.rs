pub mod cdn;
pub mod embeds;
pub mod fonts;
pub mod legal;
pub mod storage;
pub mod tracking;
