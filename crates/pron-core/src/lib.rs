//! Pronunciation dictionary cleaning.
//!
//! Three algorithms operate on (word, transcript) pairs:
//!
//! - [`g2p`]: learns a grapheme → phoneme-cluster table and aligns words to
//!   their transcripts with it.
//! - [`compound`]: splits compounds into attested components and recovers a
//!   transcript for each component from the alignment.
//! - [`variants`]: diffs competing transcripts of one word and picks a
//!   canonical one by an ordered rule table.

pub mod compound;
pub mod dict;
pub mod g2p;
pub mod settings;
pub mod unicode;
pub mod variants;
