pub mod ocr_space;
pub mod recognizer;

pub use ocr_space::{ensure_data_url, OcrSpaceClient, OCR_SPACE_URL};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError};
