pub mod post_dto;

pub use post_dto::{
    is_image_type, CreatePostDto, LocationDto, SubmitErrorResponseDto, UploadResponseDto,
    ALLOWED_IMAGE_TYPES,
};
