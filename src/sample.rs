//! Struct `Sample` represents a batch sample
//! of numeric features and one nominal target.
//! Struct `InstanceTable` is its view during training.

pub mod feature;
pub mod target;
pub mod sample_struct;
pub mod reader;
pub mod instance_table;


pub use reader::SampleReader;
pub use sample_struct::Sample;
pub use feature::Feature;
pub use target::NominalTarget;
pub use instance_table::{
    InstanceTable,
    SortedColumn,
    VirtualLabels,
    Label,
};
