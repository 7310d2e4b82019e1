pub mod analyse;
pub mod replay;
pub mod track;
