mod add_photo;
mod list_photos;

pub use add_photo::*;
pub use list_photos::*;
