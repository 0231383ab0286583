use serde::{Deserialize, Serialize};

use crate::model::image_ref::ImageRef;

/// Postal address attached to a detection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl AddressRecord {
    /// Second address line, e.g. `Springfield, IL 62701`.
    pub fn locality_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip_code)
    }
}

/// Body of `GET /api/new-plate` as sent by the detection service.
///
/// `plate_imgs` and `confidences` are parallel arrays. The service is
/// expected to keep them the same length but nothing enforces it, so they
/// are only ever consumed through [`ResultRecord::from`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateResponse {
    pub image_filename: String,
    pub annotated_img: String,
    pub plate_imgs: Vec<String>,
    pub confidences: Vec<String>,
    pub plate_detected: bool,
    pub address: AddressRecord,
    pub lat: f64,
    pub lon: f64,
}

/// One cropped plate image paired with its detection confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateEntry {
    pub image_ref: String,
    /// One-line description of `image_ref`, computed once at decode time.
    pub image_summary: String,
    /// `None` when the service sent fewer confidences than plate images.
    pub confidence: Option<String>,
}

impl PlateEntry {
    pub fn new(image_ref: String, confidence: Option<String>) -> Self {
        Self {
            image_summary: ImageRef::inspect(&image_ref).summary(),
            image_ref,
            confidence,
        }
    }
}

/// A validated detection result, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub image_filename: String,
    pub annotated_image: String,
    /// Summary of `annotated_image`; embedded images are decoded once here,
    /// not on every redraw.
    pub annotated_summary: String,
    pub plates: Vec<PlateEntry>,
    pub plate_detected: bool,
    pub address: AddressRecord,
    pub lat: f64,
    pub lon: f64,
}

impl ResultRecord {
    /// Decode a response body into a record.
    ///
    /// Fails when a required field is missing or has the wrong type.
    /// Unknown fields are ignored.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let response: PlateResponse = serde_json::from_slice(body)?;
        Ok(Self::from(response))
    }
}

impl From<PlateResponse> for ResultRecord {
    fn from(response: PlateResponse) -> Self {
        let image_count = response.plate_imgs.len();
        let confidence_count = response.confidences.len();
        if image_count != confidence_count {
            tracing::warn!(
                image_filename = %response.image_filename,
                plate_imgs = image_count,
                confidences = confidence_count,
                "plate image and confidence counts differ"
            );
        }

        let mut confidences = response.confidences.into_iter();
        let plates = response
            .plate_imgs
            .into_iter()
            .map(|image_ref| PlateEntry::new(image_ref, confidences.next()))
            .collect();

        Self {
            image_filename: response.image_filename,
            annotated_summary: ImageRef::inspect(&response.annotated_img).summary(),
            annotated_image: response.annotated_img,
            plates,
            plate_detected: response.plate_detected,
            address: response.address,
            lat: response.lat,
            lon: response.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    const SAMPLE: &str = r#"{
        "image_filename": "car1.jpg",
        "annotated_img": "/img/car1.jpg",
        "plate_imgs": ["/img/p1.jpg"],
        "confidences": ["0.87"],
        "plate_detected": true,
        "address": {
            "street_address": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip_code": "62701"
        },
        "lat": 39.78,
        "lon": -89.65
    }"#;

    #[test]
    fn decodes_sample_body() {
        let record = ResultRecord::from_json(SAMPLE.as_bytes()).unwrap();
        assert_eq!(record.image_filename, "car1.jpg");
        assert_eq!(record.annotated_image, "/img/car1.jpg");
        assert_eq!(
            record.plates,
            vec![PlateEntry::new(
                "/img/p1.jpg".to_string(),
                Some("0.87".to_string())
            )]
        );
        assert_eq!(record.annotated_summary, "/img/car1.jpg");
        assert_eq!(record.plates[0].image_summary, "/img/p1.jpg");
        assert!(record.plate_detected);
        assert_eq!(record.address.street_address, "1 Main St");
        assert_eq!(record.address.locality_line(), "Springfield, IL 62701");
        assert_eq!(record.lat, 39.78);
        assert_eq!(record.lon, -89.65);
    }

    #[test]
    fn ignores_unknown_fields() {
        // The service passes its address row through, coordinates included.
        let body = SAMPLE.replace(
            "\"zip_code\": \"62701\"",
            "\"zip_code\": \"62701\", \"lat\": 39.78, \"the_geom\": \"POINT (-89.65 39.78)\"",
        );
        let record = ResultRecord::from_json(body.as_bytes()).unwrap();
        assert_eq!(record.address.zip_code, "62701");
    }

    #[test]
    fn missing_field_is_an_error() {
        let body = SAMPLE.replace("\"plate_detected\": true,", "");
        assert!(ResultRecord::from_json(body.as_bytes()).is_err());
    }

    #[test]
    fn mistyped_field_is_an_error() {
        let body = SAMPLE.replace("\"lat\": 39.78", "\"lat\": \"north\"");
        assert!(ResultRecord::from_json(body.as_bytes()).is_err());
    }

    #[test]
    fn short_confidences_leave_placeholder() {
        let body = SAMPLE
            .replace("[\"/img/p1.jpg\"]", "[\"a.png\", \"b.png\"]")
            .replace("[\"0.87\"]", "[\"0.9\"]");
        let record = ResultRecord::from_json(body.as_bytes()).unwrap();
        assert_eq!(record.plates.len(), 2);
        assert_eq!(record.plates[0].confidence.as_deref(), Some("0.9"));
        assert_eq!(record.plates[1].confidence, None);
    }

    #[test]
    fn embedded_images_are_summarized_at_decode() {
        let embedded = format!("data:image/jpeg;base64,{}", STANDARD.encode(b"0123456789"));
        let body = SAMPLE
            .replace("\"/img/car1.jpg\"", &format!("\"{embedded}\""))
            .replace("[\"/img/p1.jpg\"]", "[\"data:image/png;base64,@@@\"]");
        let record = ResultRecord::from_json(body.as_bytes()).unwrap();
        assert_eq!(record.annotated_summary, "embedded image/jpeg, 10 B");
        assert_eq!(
            record.plates[0].image_summary,
            "embedded image (unreadable: invalid base64)"
        );
    }

    #[test]
    fn extra_confidences_are_dropped() {
        let body = SAMPLE.replace("[\"0.87\"]", "[\"0.87\", \"0.42\"]");
        let record = ResultRecord::from_json(body.as_bytes()).unwrap();
        assert_eq!(record.plates.len(), 1);
        assert_eq!(record.plates[0].confidence.as_deref(), Some("0.87"));
    }
}
