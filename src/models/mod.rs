pub mod manuscript;
pub mod report;

pub use manuscript::Manuscript;
pub use report::{
    FormatFinding, GrammarContext, GrammarFinding, ReferenceFinding, Report, StructureFinding,
};
