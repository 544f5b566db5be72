pub mod boxplot;
pub mod boxplot_chart;
pub mod chart_data;
pub mod comparison_yaml;
pub mod data_source;
pub mod demo_data;
pub mod derived_metrics;
pub mod design_chart;
pub mod design_comparison;
pub mod modeling_api;
pub mod nearest_match;
pub mod results_yaml;
pub mod series_filter;
pub mod session;
pub mod study_yaml;
