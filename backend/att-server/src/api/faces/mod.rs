pub mod face_list_response;
pub mod faces;
pub mod upload_response;
