use utoipa::ToSchema;

/// Multipart body of a spreadsheet upload.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct UploadForm {
    /// xlsx, xls, xlsb or ods workbook; only the first sheet is read.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}
