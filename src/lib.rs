//! # cocoa BASIC
//!
//! A line-numbered BASIC with a teletype style command shell.
//!
//! Programs are typed in one numbered line at a time, listed, saved,
//! loaded and run. Lines without a number run immediately.
//! ```text
//! 10 FOR I = 1 TO 3
//! 20 PRINT I;
//! 30 NEXT I
//! RUN
//!  1  2  3
//! Ready.
//! ```
//!
//! The interpreter is usable as a library. A [`term::Shell`] takes lines
//! from any reader and writes to any writer.
//! ```
//! let mut shell = basic::term::Shell::default();
//! let mut out: Vec<u8> = vec![];
//! shell
//!     .session(&mut "PRINT 2 + 3 * 4\n".as_bytes(), &mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), " 14 \n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/chapter_4.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_4;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
