//! A miniature complete works used across unit tests.
//!
//! Front matter, a contents listing padded to the default window length, and
//! three sections. The listing reproduces two of the known title mismatches.

use crate::corpus::store::CorpusStore;
use crate::search::engine::Searcher;
use crate::sections::builder::{SectionMapBuilder, DEFAULT_CONTENTS_WINDOW};

pub(crate) const FILLER: &str = "Here follows a line of plain verse to pad the page.\n";

pub(crate) const FRONT_MATTER_SWORD: &str = "A sword hangs over the front matter.\n";
pub(crate) const SONNETS_SWORD: &str = "My sword is sheathed in rhyme.\n";
pub(crate) const ANTONY_SWORD: &str = "Draw thy Sword, good Antony.\n";
pub(crate) const ANTONY_SHOUT: &str = "THE SWORD IS DRAWN.\n";
pub(crate) const HENRY_MIXED: &str = "Harry wields a sWoRd at Agincourt.\n";

fn filler(lines: usize) -> String {
    FILLER.repeat(lines)
}

/// The listing block, padded with blank lines to exactly the default window.
pub(crate) fn contents_listing() -> String {
    let mut listing = String::from(
        "Contents\n\nTHE SONNETS\nTHE TRAGEDY OF ANTONY AND CLEOPATRA\nTHE LIFE OF KING HENRY THE FIFTH\n",
    );
    let padding = DEFAULT_CONTENTS_WINDOW - listing.len();
    listing.push_str(&"\n".repeat(padding));
    listing
}

pub(crate) fn tiny_works() -> String {
    let mut text = String::from("The Project Gutenberg eBook of The Tiny Works\n\n");
    text.push_str(&filler(6));
    text.push_str(FRONT_MATTER_SWORD);
    text.push_str(&filler(6));
    text.push('\n');

    text.push_str(&contents_listing());

    text.push_str("THE SONNETS\n\n");
    text.push_str(&filler(6));
    text.push_str(SONNETS_SWORD);
    text.push_str(&filler(6));

    text.push_str("ANTONY AND CLEOPATRA\n\n");
    text.push_str(&filler(6));
    text.push_str(ANTONY_SWORD);
    text.push_str(&filler(3));
    text.push_str(ANTONY_SHOUT);
    text.push_str(&filler(6));

    text.push_str("THE LIFE OF KING HENRY V\n\n");
    text.push_str(&filler(6));
    text.push_str(HENRY_MIXED);
    text.push_str(&filler(6));
    text
}

pub(crate) fn tiny_store() -> CorpusStore {
    CorpusStore::from_text(tiny_works()).unwrap()
}

pub(crate) fn tiny_searcher() -> Searcher {
    let store = tiny_store();
    let sections = SectionMapBuilder::new().build(&store).unwrap();
    Searcher::new(store, sections)
}
