pub mod fonts;
pub mod spawn;
