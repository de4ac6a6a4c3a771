pub mod config;
pub mod logging;

pub mod batch;
pub mod fetch;
pub mod naming;
pub mod output_dir;
pub mod url_list;
