//! Media uploads.
//!
//! Uploading an image takes three requests:
//!
//! 1. GET `/media/upload?type=<image type>` for upload instructions
//! 2. Send the file as multipart to the `upload_url` from the instructions,
//!    together with its `upload_data` fields and the `upload_token`
//! 3. POST `/media/upload/` with the `upload_token` and an optional crop mask
//!
//! The crop mask is validated before the first request, so a partial mask
//! never leaves an orphaned upload behind.

use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::clients::{HttpMethod, MultipartField, RequestSpec};
use crate::entity::{Entity, EntityError, EntityState, Uploadable};

/// The four keys of a crop mask, all required when a mask is given.
pub const CROP_MASK_KEYS: [&str; 4] = [
    "crop_mask.top_left.x",
    "crop_mask.top_left.y",
    "crop_mask.width",
    "crop_mask.height",
];

/// What an uploaded image will be used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// An event logo.
    EventLogo,
    /// A view-from-seat picture for reserved seating.
    EventViewFromSeat,
    /// An organizer logo.
    OrganizerLogo,
    /// A user profile photo.
    UserPhoto,
}

impl ImageType {
    /// Returns the API name of the image type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EventLogo => "image-event-logo",
            Self::EventViewFromSeat => "image-event-view-from-seat",
            Self::OrganizerLogo => "image-organizer-logo",
            Self::UserPhoto => "image-user-photo",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upload instructions returned by `GET /media/upload`.
#[derive(Debug, Deserialize)]
struct UploadInstructions {
    #[serde(default)]
    upload_url: String,
    #[serde(default = "default_upload_method")]
    upload_method: String,
    #[serde(default)]
    upload_token: String,
    #[serde(default)]
    upload_data: Map<String, Value>,
    #[serde(default = "default_file_parameter_name")]
    file_parameter_name: String,
}

fn default_upload_method() -> String {
    "POST".to_string()
}

fn default_file_parameter_name() -> String {
    "file".to_string()
}

impl UploadInstructions {
    fn parse(response: Value) -> Result<Self, EntityError> {
        let rejected = |message: &str| EntityError::UploadRejected {
            message: message.to_string(),
        };

        let instructions: Self = serde_json::from_value(response)
            .map_err(|e| rejected(&format!("invalid upload instructions: {e}")))?;

        if instructions.upload_data.is_empty() {
            return Err(rejected("no upload_data in instructions"));
        }
        if instructions.upload_url.is_empty() {
            return Err(rejected("no upload_url in instructions"));
        }
        if instructions.upload_token.is_empty() {
            return Err(rejected("no upload_token in instructions"));
        }
        Ok(instructions)
    }

    fn method(&self) -> Result<HttpMethod, EntityError> {
        HttpMethod::parse(&self.upload_method).ok_or_else(|| EntityError::UploadRejected {
            message: format!("unsupported upload method {}", self.upload_method),
        })
    }

    fn multipart_fields(&self, file_name: &str, bytes: Vec<u8>) -> Vec<MultipartField> {
        let mut fields: Vec<MultipartField> = self
            .upload_data
            .iter()
            .map(|(name, value)| {
                let value = value
                    .as_str()
                    .map_or_else(|| value.to_string(), ToString::to_string);
                MultipartField::text(name.as_str(), value)
            })
            .collect();
        fields.push(MultipartField::file(
            self.file_parameter_name.as_str(),
            file_name,
            bytes,
        ));
        fields.push(MultipartField::text("upload_token", self.upload_token.as_str()));
        fields
    }
}

/// Picks the crop mask parameters out of `crop_mask`.
///
/// An empty mask yields no parameters. Keys other than [`CROP_MASK_KEYS`]
/// are ignored.
///
/// # Errors
///
/// Returns [`EntityError::IncompleteCropMask`] naming the first missing key
/// if the mask is non-empty but incomplete.
pub fn crop_mask_params(crop_mask: &Map<String, Value>) -> Result<Map<String, Value>, EntityError> {
    if crop_mask.is_empty() {
        return Ok(Map::new());
    }

    let mut params = Map::new();
    for key in CROP_MASK_KEYS {
        let value = crop_mask
            .get(key)
            .filter(|value| !value.is_null())
            .ok_or(EntityError::IncompleteCropMask { missing: key })?;
        params.insert(key.to_string(), value.clone());
    }
    Ok(params)
}

/// A media item, addressed as `/media/{id}/`.
///
/// New images are uploaded through [`Uploadable`]:
///
/// ```rust,ignore
/// use eventbrite_connector::entity::Uploadable;
/// use eventbrite_connector::entity::resources::ImageType;
///
/// let media = connector.add_entity("media", None)?;
/// let mut media = media.lock().await;
/// let uploadable = media.as_uploadable().unwrap();
/// let response = uploadable
///     .upload("logo.png".as_ref(), ImageType::EventLogo, &serde_json::Map::new())
///     .await?;
/// ```
#[derive(Debug, Default)]
pub struct Media {
    state: EntityState,
}

impl Media {
    /// API path segment for media.
    pub const API_TYPE: &'static str = "media";

    /// Creates a detached media entity.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }

    async fn upload_instructions(
        &self,
        image_type: ImageType,
    ) -> Result<UploadInstructions, EntityError> {
        let url = format!("{}upload", self.collection_endpoint()?);
        let spec = RequestSpec::builder(url)
            .param("type", image_type.as_str())
            .build();
        let response = self.connector()?.request(spec).await?;
        UploadInstructions::parse(response)
    }

    async fn notify_api(
        &self,
        upload_token: &str,
        crop_params: Map<String, Value>,
    ) -> Result<Value, EntityError> {
        let url = format!("{}upload/", self.collection_endpoint()?);
        let mut data = Map::new();
        data.insert("upload_token".to_string(), Value::from(upload_token));
        data.extend(crop_params);

        let spec = RequestSpec::builder(url)
            .method(HttpMethod::Post)
            .data(data)
            .build();
        Ok(self.connector()?.request(spec).await?)
    }
}

impl Entity for Media {
    fn entity_api_type(&self) -> &'static str {
        Self::API_TYPE
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn as_uploadable(&mut self) -> Option<&mut dyn Uploadable> {
        Some(self)
    }
}

#[async_trait]
impl Uploadable for Media {
    async fn upload_bytes(
        &mut self,
        file_name: &str,
        bytes: Vec<u8>,
        image_type: ImageType,
        crop_mask: &Map<String, Value>,
    ) -> Result<Value, EntityError> {
        let crop_params = crop_mask_params(crop_mask)?;

        let instructions = self.upload_instructions(image_type).await?;
        let method = instructions.method()?;
        let fields = instructions.multipart_fields(file_name, bytes);
        self.connector()?
            .send_multipart(method, &instructions.upload_url, fields)
            .await?;

        tracing::debug!("Uploaded {} as {}, notifying API", file_name, image_type);
        self.notify_api(&instructions.upload_token, crop_params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MultipartContents;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_image_type_names() {
        assert_eq!(ImageType::EventLogo.as_str(), "image-event-logo");
        assert_eq!(
            ImageType::EventViewFromSeat.as_str(),
            "image-event-view-from-seat"
        );
        assert_eq!(ImageType::OrganizerLogo.as_str(), "image-organizer-logo");
        assert_eq!(ImageType::UserPhoto.to_string(), "image-user-photo");
    }

    #[test]
    fn test_empty_crop_mask_yields_no_params() {
        assert!(crop_mask_params(&Map::new()).unwrap().is_empty());
    }

    #[test]
    fn test_complete_crop_mask_keeps_only_mask_keys() {
        let params = crop_mask_params(&object(json!({
            "crop_mask.top_left.x": 0,
            "crop_mask.top_left.y": 10,
            "crop_mask.width": 200,
            "crop_mask.height": 100,
            "unrelated": "x"
        })))
        .unwrap();

        assert_eq!(params.len(), 4);
        assert_eq!(params["crop_mask.height"], json!(100));
        assert!(!params.contains_key("unrelated"));
    }

    #[test]
    fn test_partial_crop_mask_names_missing_key() {
        let result = crop_mask_params(&object(json!({
            "crop_mask.top_left.x": 0,
            "crop_mask.top_left.y": 10,
            "crop_mask.width": 200
        })));

        assert!(matches!(
            result,
            Err(EntityError::IncompleteCropMask {
                missing: "crop_mask.height"
            })
        ));
    }

    #[test]
    fn test_instructions_without_upload_data_are_rejected() {
        let result = UploadInstructions::parse(json!({
            "upload_url": "https://uploads.example.com",
            "upload_token": "tok",
            "upload_data": {}
        }));
        assert!(matches!(result, Err(EntityError::UploadRejected { .. })));

        let result = UploadInstructions::parse(json!({}));
        assert!(matches!(result, Err(EntityError::UploadRejected { .. })));
    }

    #[test]
    fn test_instructions_build_multipart_fields() {
        let instructions = UploadInstructions::parse(json!({
            "upload_url": "https://uploads.example.com",
            "upload_method": "POST",
            "upload_token": "tok",
            "upload_data": {"AWSAccessKeyId": "key", "policy": "p"},
            "file_parameter_name": "file"
        }))
        .unwrap();

        assert_eq!(instructions.method().unwrap(), HttpMethod::Post);
        let fields = instructions.multipart_fields("logo.png", vec![1, 2]);
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["AWSAccessKeyId", "policy", "file", "upload_token"]);
        assert!(matches!(
            &fields[2].contents,
            MultipartContents::File { file_name, bytes } if file_name == "logo.png" && bytes == &[1, 2]
        ));
    }

    #[tokio::test]
    async fn test_partial_crop_mask_fails_before_any_request() {
        // Detached: any request attempt would surface as Detached instead.
        let mut media = Media::default();
        let result = media
            .upload_bytes(
                "logo.png",
                vec![0],
                ImageType::EventLogo,
                &object(json!({"crop_mask.width": 1})),
            )
            .await;

        assert!(matches!(
            result,
            Err(EntityError::IncompleteCropMask {
                missing: "crop_mask.top_left.x"
            })
        ));
    }
}
