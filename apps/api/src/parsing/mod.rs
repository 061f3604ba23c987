// Field inference over extracted resume text: normalization, the four field extractors,
// and the parser that assembles them into a CandidateRecord.

pub mod contact;
pub mod name;
pub mod normalize;
pub mod parser;
pub mod skills;

pub use parser::ResumeParser;
pub use skills::SkillsDictionary;
