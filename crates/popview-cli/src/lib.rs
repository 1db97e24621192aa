//! popview-cli
//! ===========
//!
//! Terminal viewer for the monthly population-by-age-and-sex extract.
//!
//! The binary (`popview`) loads the extract once, then answers district
//! queries either one-shot (`popview show 강남구`) or from an interactive
//! prompt. Rendering and the prompt loop live in this library target so they
//! can be exercised without a terminal.
//!
//! Basic usage:
//!
//! ```text
//! popview --input data/202205.csv stats
//! popview districts 수원시
//! popview show 강남구 --pick 1
//! popview --variant en --chart bars show Suwon
//! popview                        # interactive prompt
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod chart;
pub mod session;
