/// Scale, build, composite, deliver.
pub mod preview;
