//! Guest pass document rendering

use image::ImageFormat;
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument};

use crate::{
    config::FrontDeskConfig,
    error::{AppError, AppResult},
    models::visitor::Visitor,
};

const INCH_MM: f32 = 25.4;
const QR_SIZE_INCH: f32 = 3.0;

fn inch(value: f32) -> Mm {
    Mm(value * INCH_MM)
}

fn pdf_error(e: impl std::fmt::Display) -> AppError {
    AppError::Internal(format!("Failed to render guest pass: {}", e))
}

/// Text lines describing the visit, in print order
pub fn pass_lines(visitor: &Visitor) -> Vec<String> {
    vec![
        format!("Name: {} {}", visitor.name, visitor.surname),
        format!("Company: {}", visitor.company_name.as_deref().unwrap_or("")),
        format!("Host: {}", visitor.host),
        format!("Date of visit: {}", visitor.display_visit_date()),
        format!("Number of visitors: {}", visitor.visitors_count),
    ]
}

/// Render a one page A4 guest pass embedding the token PNG
pub fn render_pass(
    visitor: &Visitor,
    token_png: &[u8],
    organization: &FrontDeskConfig,
) -> AppResult<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new("Guest pass", Mm(210.0), Mm(297.0), "Pass");
    let layer = doc.get_page(page).get_layer(layer);
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;

    layer.use_text("Guest pass", 16.0, inch(1.0), inch(10.5), &font);

    let mut y = 9.5;
    for line in pass_lines(visitor) {
        layer.use_text(line, 12.0, inch(1.0), inch(y), &font);
        y -= 0.3;
    }

    let token = image::load_from_memory_with_format(token_png, ImageFormat::Png)
        .map_err(pdf_error)?;
    // dpi chosen so the code prints at QR_SIZE_INCH
    let dpi = token.width() as f32 / QR_SIZE_INCH;
    Image::from_dynamic_image(&token).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(inch(1.0)),
            translate_y: Some(inch(4.0)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    let mut footer = vec![organization.organization_name.clone()];
    footer.extend(organization.organization_address.iter().cloned());
    footer.push(format!("Opening Hours: {}", organization.opening_hours));

    let mut y = 2.5;
    for line in footer {
        layer.use_text(line, 12.0, inch(1.0), inch(y), &font);
        y -= 0.3;
    }

    doc.save_to_bytes().map_err(pdf_error)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::services::token::render_token_png;

    fn visitor() -> Visitor {
        Visitor {
            identifier: "8c1b6f0e-5d0a-4d8e-9a39-0c5b3e2f7a11".to_string(),
            name: "Ana".to_string(),
            surname: "Doe".to_string(),
            company_name: Some("Acme".to_string()),
            visitors_count: 2,
            host: "Bob".to_string(),
            visit_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            registration_time: Utc::now(),
        }
    }

    #[test]
    fn test_pass_lines() {
        let lines = pass_lines(&visitor());
        assert_eq!(lines[0], "Name: Ana Doe");
        assert_eq!(lines[1], "Company: Acme");
        assert_eq!(lines[2], "Host: Bob");
        assert_eq!(lines[3], "Date of visit: 01.01.2030");
        assert_eq!(lines[4], "Number of visitors: 2");
    }

    #[test]
    fn test_pass_without_company() {
        let mut v = visitor();
        v.company_name = None;
        assert_eq!(pass_lines(&v)[1], "Company: ");
    }

    #[test]
    fn test_render_pass_is_pdf() {
        let v = visitor();
        let png = render_token_png(&v.identifier).unwrap();
        let pdf = render_pass(&v, &png, &FrontDeskConfig::default()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pass_rejects_garbage_image() {
        let result = render_pass(&visitor(), b"not a png", &FrontDeskConfig::default());
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
