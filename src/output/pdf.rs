//! PDF export built on printpdf's builtin Helvetica fonts

use crate::error::Result;
use crate::model::ResumeData;
use crate::output::formatter::{contact_items, date_range, role_line};
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 18.0;
const PT_TO_MM: f32 = 0.3528;

const NAME_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 12.5;
const BODY_SIZE: f32 = 10.0;

/// One laid-out line of the document
#[derive(Debug, Clone, PartialEq)]
pub struct PdfLine {
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub indent_mm: f32,
    /// Extra space above the line
    pub gap_mm: f32,
}

impl PdfLine {
    fn body(text: impl Into<String>, indent_mm: f32) -> Self {
        Self {
            text: text.into(),
            size: BODY_SIZE,
            bold: false,
            indent_mm,
            gap_mm: 0.0,
        }
    }

    fn strong(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: BODY_SIZE,
            bold: true,
            indent_mm: 0.0,
            gap_mm: 1.5,
        }
    }

    fn heading(text: &str) -> Self {
        Self {
            text: text.to_uppercase(),
            size: HEADING_SIZE,
            bold: true,
            indent_mm: 0.0,
            gap_mm: 5.0,
        }
    }

    fn height_mm(&self) -> f32 {
        self.size * PT_TO_MM * 1.4
    }
}

#[derive(Debug, Clone, Default)]
pub struct PdfExporter;

impl PdfExporter {
    pub fn new() -> Self {
        Self
    }

    /// Lines in reading order. Tolerates any partially filled resume.
    pub fn layout(&self, resume: &ResumeData) -> Vec<PdfLine> {
        let mut lines = Vec::new();

        let name = if resume.contact.name.is_empty() {
            "Your Name"
        } else {
            &resume.contact.name
        };
        lines.push(PdfLine {
            text: name.to_string(),
            size: NAME_SIZE,
            bold: true,
            indent_mm: 0.0,
            gap_mm: 0.0,
        });

        let contact = contact_items(resume);
        if !contact.is_empty() {
            push_wrapped(&mut lines, &contact.join("  |  "), 0.0);
        }

        if !resume.summary.is_empty() {
            lines.push(PdfLine::heading("Summary"));
            push_wrapped(&mut lines, &resume.summary, 0.0);
        }

        if !resume.experience.is_empty() {
            lines.push(PdfLine::heading("Experience"));
            for entry in &resume.experience {
                let dates = date_range(&entry.start_date, &entry.end_date);
                let head = if dates.is_empty() {
                    role_line(entry)
                } else {
                    format!("{}   ({})", role_line(entry), dates)
                };
                lines.push(PdfLine::strong(head));
                for achievement in &entry.achievements {
                    push_wrapped(&mut lines, &format!("- {}", achievement), 4.0);
                }
            }
        }

        if !resume.education.is_empty() {
            lines.push(PdfLine::heading("Education"));
            for entry in &resume.education {
                let mut head = format!("{}, {}", entry.degree, entry.school);
                if !entry.graduation_date.is_empty() {
                    head.push_str(&format!("   ({})", entry.graduation_date));
                }
                lines.push(PdfLine::strong(head));
                if !entry.details.is_empty() {
                    push_wrapped(&mut lines, &entry.details, 4.0);
                }
            }
        }

        if !resume.skills.is_empty() {
            lines.push(PdfLine::heading("Skills"));
            push_wrapped(&mut lines, &resume.skills.join(", "), 0.0);
        }

        if !resume.certifications.is_empty() {
            lines.push(PdfLine::heading("Certifications"));
            for cert in &resume.certifications {
                let details = [cert.issuer.as_str(), cert.date.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<&str>>()
                    .join(", ");
                let text = if details.is_empty() {
                    format!("- {}", cert.name)
                } else {
                    format!("- {} ({})", cert.name, details)
                };
                push_wrapped(&mut lines, &text, 0.0);
            }
        }

        if !resume.projects.is_empty() {
            lines.push(PdfLine::heading("Projects"));
            for project in &resume.projects {
                lines.push(PdfLine::strong(project.name.clone()));
                if !project.description.is_empty() {
                    push_wrapped(&mut lines, &project.description, 4.0);
                }
                if !project.technologies.is_empty() {
                    push_wrapped(
                        &mut lines,
                        &format!("Technologies: {}", project.technologies.join(", ")),
                        4.0,
                    );
                }
            }
        }

        lines
    }

    /// Render to PDF bytes, adding pages as needed
    pub fn render(&self, resume: &ResumeData) -> Result<Vec<u8>> {
        let name = resume.contact.name.trim();
        let title = if name.is_empty() {
            "Resume".to_string()
        } else {
            format!("{} - Resume", name)
        };
        let (doc, first_page, first_layer) =
            PdfDocument::new(&title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

        for line in self.layout(resume) {
            let needed = line.gap_mm + line.height_mm();
            if y - needed < MARGIN_MM {
                let (page, page_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                layer = doc.get_page(page).get_layer(page_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }
            y -= needed;

            let font = if line.bold { &bold } else { &regular };
            layer.use_text(
                to_win_ansi(&line.text),
                line.size,
                Mm(MARGIN_MM + line.indent_mm),
                Mm(y),
                font,
            );
        }

        Ok(doc.save_to_bytes()?)
    }
}

fn push_wrapped(lines: &mut Vec<PdfLine>, text: &str, indent_mm: f32) {
    let width_mm = PAGE_WIDTH_MM - 2.0 * MARGIN_MM - indent_mm;
    // Helvetica averages about half an em per character
    let max_chars = (width_mm / (BODY_SIZE * PT_TO_MM * 0.5)).floor() as usize;

    for chunk in wrap(text, max_chars) {
        lines.push(PdfLine::body(chunk, indent_mm));
    }
}

fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let extra = if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && current.chars().count() + extra + word.chars().count() > max_chars {
            wrapped.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    wrapped
}

/// Builtin PDF fonts only cover Latin-1
fn to_win_ansi(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            c if (c as u32) < 256 => c,
            _ => '?',
        })
        .collect()
}
