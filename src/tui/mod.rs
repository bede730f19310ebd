pub mod pr_display;
