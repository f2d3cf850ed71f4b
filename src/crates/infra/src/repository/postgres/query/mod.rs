pub mod post_stats;
