//! # Card Layout Engine
//!
//! Places every card of a batch on one shared canvas.
//!
//! ## Per-card pipeline
//!
//! ```text
//! CardRecord ─► sanitize / pad ─► card text ─► fit_text ─► CardPlan ─► draw
//!                                                  │
//!                              (WiFi) wifi_payload ─► qr::encode
//! ```
//!
//! Planning is pure geometry; drawing consumes the plan. Any failing card
//! aborts the whole sheet.

use image::{Rgb, RgbImage, RgbaImage, imageops::{self, FilterType}};
use std::path::Path;
use std::sync::Arc;

use super::draw;
use super::grid::{GridLayout, GridSpec, Rect};
use crate::card::{CardBatch, CardRecord};
use crate::error::CardError;
use crate::qr;
use crate::text::{
    MIN_FONT_SIZE, TextExtent, Typeface, draw_multiline, fit_text, normalize_credentials, sanitize,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Where the QR code of a WiFi card goes.
#[derive(Debug, Clone, PartialEq)]
pub struct QrPlacement {
    /// Provisioning string encoded in the code.
    pub payload: String,
    pub x: i64,
    pub y: i64,
    pub size: u32,
}

/// Computed geometry for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPlan {
    pub index: usize,
    pub cell: Rect,
    pub logo_origin: (i64, i64),
    /// Sanitized two-line card text.
    pub text: String,
    pub font_size: u32,
    pub text_extent: TextExtent,
    /// Top-left of the text block.
    pub text_origin: (f32, f32),
    pub qr: Option<QrPlacement>,
}

/// A composed sheet and the plans that produced it.
#[derive(Debug, Clone)]
pub struct RenderedSheet {
    pub image: RgbImage,
    pub cards: Vec<CardPlan>,
}

/// Renders card batches with a fixed face, logo and geometry.
pub struct CardRenderer {
    face: Arc<dyn Typeface>,
    logo: RgbaImage,
    spec: GridSpec,
}

impl CardRenderer {
    /// Create a renderer. The logo is scaled once to the grid's logo height,
    /// keeping its aspect ratio.
    pub fn new(face: Arc<dyn Typeface>, logo: &RgbaImage, spec: GridSpec) -> Result<Self, CardError> {
        let (w, h) = logo.dimensions();
        if w == 0 || h == 0 {
            return Err(CardError::Config("logo image is empty".to_string()));
        }
        let logo_h = spec.logo_height();
        let logo_w = (w as f64 * (logo_h as f64 / h as f64)) as u32;
        let logo = imageops::resize(logo, logo_w.max(1), logo_h, FilterType::CatmullRom);

        Ok(Self { face, logo, spec })
    }

    /// Create a renderer with the logo loaded from disk.
    pub fn with_logo_file(
        face: Arc<dyn Typeface>,
        logo_path: impl AsRef<Path>,
        spec: GridSpec,
    ) -> Result<Self, CardError> {
        let logo = image::open(logo_path.as_ref())?.to_rgba8();
        Self::new(face, &logo, spec)
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Scaled logo as it will appear on each card.
    pub fn logo(&self) -> &RgbaImage {
        &self.logo
    }

    /// Compute the geometry of card `index` without drawing anything.
    pub fn plan_card(
        &self,
        grid: &GridLayout,
        index: usize,
        record: &CardRecord,
    ) -> Result<CardPlan, CardError> {
        let spec = &self.spec;
        let cell = grid.cell(index);
        let (card_w, card_h) = (cell.width as f32, cell.height as f32);
        let (cell_x, cell_y) = (cell.x as f32, cell.y as f32);

        let logo_origin = (
            cell.x as i64 + (cell.width as i64 - self.logo.width() as i64).div_euclid(2),
            (cell.y + spec.logo_top_margin) as i64,
        );

        let (text, credentials) = card_text(record);

        let (max_w, max_h) = spec.text_box();
        let fitted = fit_text(
            self.face.as_ref(),
            &text,
            record.kind().max_font_size(),
            spec.text_spacing,
            max_w,
            max_h,
        )
        .ok_or(CardError::ContentTooLarge {
            card: index,
            min_size: MIN_FONT_SIZE,
        })?;
        let extent = fitted.extent;

        let text_x = cell_x + ((card_w - extent.width) / 2.0).floor();
        let centered_y = cell_y + ((card_h - extent.height) / 2.0).floor();
        let text_y = match credentials {
            // WiFi text sits half its height above centre to leave room for the QR code
            Some(_) => (centered_y - (extent.height / 2.0).floor()).max(cell_y + spec.text_spacing),
            None => centered_y,
        };

        let qr = credentials.map(|(ssid, password)| {
            let size = spec.qr_size;
            let x = cell.x as i64 + (cell.width as i64 - size as i64).div_euclid(2);
            let below_text = (cell.height as i64 - size as i64).div_euclid(2) as f32
                + (extent.height / 2.0).floor()
                + spec.text_spacing
                + spec.qr_spacing;
            let mut y = cell.y as i64 + below_text as i64;
            if y + size as i64 > cell.bottom() as i64 {
                y = cell.bottom() as i64 - size as i64;
            }
            QrPlacement {
                payload: qr::wifi_payload(&ssid, &password),
                x,
                y,
                size,
            }
        });

        tracing::debug!(card = index, font_size = fitted.size, "card laid out");

        Ok(CardPlan {
            index,
            cell,
            logo_origin,
            text,
            font_size: fitted.size,
            text_extent: extent,
            text_origin: (text_x, text_y),
            qr,
        })
    }

    /// Plan and draw every card of `batch` onto a fresh white canvas.
    ///
    /// The canvas keeps the grid's fixed width, so the third column's cell
    /// runs past the right edge (x 1106..1639 on a 1600 px sheet). Anything
    /// drawn there beyond x 1600, including text wider than about 455 px, is
    /// clipped.
    pub fn render(&self, batch: &CardBatch) -> Result<RenderedSheet, CardError> {
        let grid = GridLayout::new(self.spec, batch.len());
        let (width, height) = grid.canvas_size();
        let mut image = RgbImage::from_pixel(width, height, WHITE);
        let mut cards = Vec::with_capacity(batch.len());

        for (index, record) in batch.records().iter().enumerate() {
            let plan = self.plan_card(&grid, index, record)?;
            self.draw_card(&mut image, &plan)?;
            cards.push(plan);
        }

        Ok(RenderedSheet { image, cards })
    }

    fn draw_card(&self, canvas: &mut RgbImage, plan: &CardPlan) -> Result<(), CardError> {
        draw::outline(canvas, plan.cell, BLACK);

        let (logo_x, logo_y) = plan.logo_origin;
        draw::paste_masked(canvas, &self.logo, logo_x, logo_y);

        draw_multiline(
            self.face.as_ref(),
            canvas,
            plan.text_origin,
            &plan.text,
            plan.font_size as f32,
            self.spec.text_spacing,
            BLACK,
        );

        if let Some(placement) = &plan.qr {
            let code = qr::encode(&placement.payload, placement.size)?;
            draw::paste_gray(canvas, &code, placement.x, placement.y);
        }
        Ok(())
    }
}

/// Sanitized card text, plus padded credentials for WiFi cards.
fn card_text(record: &CardRecord) -> (String, Option<(String, String)>) {
    match record {
        CardRecord::WiFi { ssid, password } => {
            let (ssid, password) = normalize_credentials(sanitize(ssid), sanitize(password));
            let text = format!("SSID: {}\nPassword: {}", ssid, password);
            (text, Some((ssid, password)))
        }
        CardRecord::Contact { name, phone } => {
            let text = format!("Name: {}\nPhone: {}", sanitize(name), sanitize(phone));
            (text, None)
        }
    }
}
