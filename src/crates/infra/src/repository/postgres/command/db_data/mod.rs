pub mod like_record;
pub mod post_stats;
