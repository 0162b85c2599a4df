pub mod stage1_fetch;
pub mod stage2_similarity;
pub mod stage3_fluency;
pub mod stage4_report;
