//! Command line tool for the resource archives of BioWare's *Aurora* engine games.

pub mod commands;
pub mod size;
