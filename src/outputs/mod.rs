//! Output generation for extracted quotations.
//!
//! One submodule, [`text`], writes each quotation to its own plain-text file:
//!
//! ```text
//! out_dir/
//! ├── Pascal/
//! │   ├── Pascal_001.txt        # Texte / Auteur / Livre fields
//! │   └── Pascal_002.txt
//! └── Proverbe_chinois_001.txt  # Texte / Source fields, no comma structure
//! ```
//!
//! Numbered suffixes are probed linearly, so the directory tree doubles as
//! the only persistent state: re-running never overwrites earlier output,
//! it just extends the numbering.

pub mod text;
