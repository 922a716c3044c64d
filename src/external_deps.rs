pub use aws_config::{BehaviorVersion, Region};
pub use aws_sdk_s3::{
    Client as S3Client,
    error::{ProvideErrorMetadata, SdkError},
    operation::get_object::GetObjectError,
    primitives::ByteStream,
};
pub use chrono::{Datelike, Local, NaiveDate, Utc};
pub use csv::ReaderBuilder;
pub use flexi_logger::{Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, Naming};
pub use image::{DynamicImage, ImageFormat};
pub use once_cell::sync::Lazy as once_lazy;
pub use thiserror::Error;

pub use plotly::{
    Bar, Plot, Scatter,
    common::{
        Anchor, DashType, Font, Line, Marker, Mode, Orientation, Title,
        color::{NamedColor, Rgb},
    },
    layout::{Annotation, Axis, Layout, Legend, Shape, ShapeLine, ShapeType},
};
