#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use ds_cfg as cfg;
pub use ds_describe as describe;
pub use ds_utils as utils;
