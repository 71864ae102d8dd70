//! Regex patterns for application field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Name after "my name is": any casing, title-cased afterwards
    pub static ref CHAT_NAME_INTRO: Regex = Regex::new(
        r"(?i)\bmy\s+name\s+is[ \t]+(\p{L}[\p{L}'\-]+(?:[ \t]+\p{L}[\p{L}'\-]+)*)"
    ).unwrap();

    // Name after "i am": capitalized words only ("i am looking" is no name)
    pub static ref CHAT_NAME_SELF: Regex = Regex::new(
        r"(?i:\bi\s+am)[ \t]+(\p{Lu}[\p{L}'\-]+(?:[ \t]+\p{Lu}[\p{L}'\-]+)*)"
    ).unwrap();

    // Labeled name line in a resume ("Full Name: ...", "Name: ...")
    pub static ref DOCUMENT_NAME: Regex = Regex::new(
        r"(?m)^[ \t]*(?:Full[ \t]+)?Name[ \t]*:\s*(\p{Lu}[\p{L}'\-]+(?:[ \t]+\p{Lu}[\p{L}'\-]+)*)"
    ).unwrap();

    // Email address (local@domain.tld)
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z0-9]+\b"
    ).unwrap();

    // Skills stated in conversation, up to the end of the line
    pub static ref CHAT_SKILLS: Regex = Regex::new(
        r"(?i:\b(?:skills\s+are|i\s+know|i\s+can\s+use))\b[ \t]*:?[ \t]*([^\r\n]+)"
    ).unwrap();

    // "Skills" section header followed by a dash separator
    pub static ref SKILLS_SECTION: Regex = Regex::new(
        r"(?m)^[ \t]*Skills[ \t]*:?\s*-+"
    ).unwrap();

    // Headers that close the skills section
    pub static ref SECTION_END: Regex = Regex::new(
        r"(?m)^[ \t]*(?:Projects|Certifications)\b"
    ).unwrap();
}
