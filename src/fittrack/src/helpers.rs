pub mod format_hm;
