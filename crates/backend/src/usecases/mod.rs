pub mod optimize_images;
