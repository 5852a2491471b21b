//! Resume formatters: console preview, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{InterviewError, Result};
use crate::model::{ExperienceEntry, ResumeData};
use crate::output::pdf::PdfExporter;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a resume snapshot as text
pub trait ResumeFormatter {
    fn format_resume(&self, resume: &ResumeData) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal preview with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Coordinates the formatters and the PDF exporter
pub struct ExportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
    pdf_exporter: PdfExporter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #222;
            max-width: 800px;
            margin: 0 auto;
            padding: 32px;
        }
        .header {
            text-align: center;
            border-bottom: 2px solid #2b6cb0;
            padding-bottom: 12px;
            margin-bottom: 20px;
        }
        .header h1 { margin: 0; }
        .contact { color: #555; font-size: 0.95em; }
        h2 {
            color: #2b6cb0;
            text-transform: uppercase;
            font-size: 1em;
            letter-spacing: 0.05em;
            border-bottom: 1px solid #e2e8f0;
            padding-bottom: 4px;
        }
        .entry { margin-bottom: 14px; }
        .entry-head { display: flex; justify-content: space-between; }
        .dates { color: #555; }
        .skills span {
            display: inline-block;
            background: #edf2f7;
            border-radius: 4px;
            padding: 2px 8px;
            margin: 2px;
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="header">
        <h1>{{ name }}</h1>
        {% if has_contact %}<p class="contact">{{ contact_html | safe }}</p>{% endif %}
    </div>
    {% if has_summary %}
    <section>
        <h2>Summary</h2>
        <p>{{ summary }}</p>
    </section>
    {% endif %}
    {% if has_experience %}
    <section>
        <h2>Experience</h2>
        {{ experience_html | safe }}
    </section>
    {% endif %}
    {% if has_education %}
    <section>
        <h2>Education</h2>
        {{ education_html | safe }}
    </section>
    {% endif %}
    {% if has_skills %}
    <section>
        <h2>Skills</h2>
        <div class="skills">{{ skills_html | safe }}</div>
    </section>
    {% endif %}
    {% if has_certifications %}
    <section>
        <h2>Certifications</h2>
        {{ certifications_html | safe }}
    </section>
    {% endif %}
    {% if has_projects %}
    <section>
        <h2>Projects</h2>
        {{ projects_html | safe }}
    </section>
    {% endif %}
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    title: String,
    name: String,
    has_contact: bool,
    contact_html: String,
    has_summary: bool,
    summary: String,
    has_experience: bool,
    experience_html: String,
    has_education: bool,
    education_html: String,
    has_skills: bool,
    skills_html: String,
    has_certifications: bool,
    certifications_html: String,
    has_projects: bool,
    projects_html: String,
}

/// "start - end", or whichever of the two is known
pub fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{} - {}", start, end),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (true, true) => String::new(),
    }
}

/// Non-empty contact fields in display order
pub fn contact_items(resume: &ResumeData) -> Vec<&str> {
    let contact = &resume.contact;
    [
        contact.email.as_str(),
        contact.phone.as_str(),
        contact.location.as_str(),
        contact.linkedin_url.as_str(),
        contact.website_url.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect()
}

/// "Title, Company" with either part optional
pub fn role_line(entry: &ExperienceEntry) -> String {
    [entry.title.as_str(), entry.company.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join(", ")
}

fn display_name(resume: &ResumeData) -> &str {
    if resume.contact.name.is_empty() {
        "Your Name"
    } else {
        &resume.contact.name
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }
}

impl ResumeFormatter for ConsoleFormatter {
    fn format_resume(&self, resume: &ResumeData) -> Result<String> {
        let mut output = String::new();

        let name = display_name(resume);
        if self.use_colors {
            output.push_str(&format!("{}\n", name.bold()));
        } else {
            output.push_str(&format!("{}\n", name));
        }
        let contact = contact_items(resume);
        if !contact.is_empty() {
            output.push_str(&self.colorize(&contact.join(" | "), Color::BrightBlack));
            output.push('\n');
        }

        if !resume.summary.is_empty() {
            output.push_str(&self.format_header("Summary"));
            output.push_str(&format!("{}\n", resume.summary));
        }

        if !resume.experience.is_empty() {
            output.push_str(&self.format_header("Experience"));
            for entry in &resume.experience {
                output.push_str(&format!(
                    "{}  {}\n",
                    self.colorize(&role_line(entry), Color::White),
                    self.colorize(&date_range(&entry.start_date, &entry.end_date), Color::BrightBlack)
                ));
                for achievement in &entry.achievements {
                    output.push_str(&format!("  • {}\n", achievement));
                }
            }
        }

        if !resume.education.is_empty() {
            output.push_str(&self.format_header("Education"));
            for entry in &resume.education {
                output.push_str(&format!("{}, {}", entry.degree, entry.school));
                if !entry.graduation_date.is_empty() {
                    output.push_str(&format!(" ({})", entry.graduation_date));
                }
                output.push('\n');
                if !entry.details.is_empty() {
                    output.push_str(&format!("  {}\n", self.colorize(&entry.details, Color::BrightBlack)));
                }
            }
        }

        if !resume.skills.is_empty() {
            output.push_str(&self.format_header("Skills"));
            output.push_str(&format!("{}\n", self.colorize(&resume.skills.join(", "), Color::Green)));
        }

        if !resume.certifications.is_empty() {
            output.push_str(&self.format_header("Certifications"));
            for cert in &resume.certifications {
                let details = [cert.issuer.as_str(), cert.date.as_str()]
                    .into_iter()
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<&str>>()
                    .join(", ");
                if details.is_empty() {
                    output.push_str(&format!("  • {}\n", cert.name));
                } else {
                    output.push_str(&format!("  • {} ({})\n", cert.name, details));
                }
            }
        }

        if !resume.projects.is_empty() {
            output.push_str(&self.format_header("Projects"));
            for project in &resume.projects {
                output.push_str(&format!("  • {}", self.colorize(&project.name, Color::White)));
                if !project.technologies.is_empty() {
                    output.push_str(&format!(" [{}]", project.technologies.join(", ")));
                }
                output.push('\n');
                if !project.description.is_empty() {
                    output.push_str(&format!("    {}\n", project.description));
                }
            }
        }

        if !resume.has_content() {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("Nothing collected yet. Answer a few questions first.", Color::Yellow)
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ResumeFormatter for JsonFormatter {
    fn format_resume(&self, resume: &ResumeData) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(resume)?)
        } else {
            Ok(serde_json::to_string(resume)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ResumeFormatter for MarkdownFormatter {
    fn format_resume(&self, resume: &ResumeData) -> Result<String> {
        let mut output = format!("# {}\n\n", display_name(resume));

        let contact = contact_items(resume);
        if !contact.is_empty() {
            output.push_str(&format!("{}\n\n", contact.join(" | ")));
        }

        if !resume.summary.is_empty() {
            output.push_str(&format!("## Summary\n\n{}\n\n", resume.summary));
        }

        if !resume.experience.is_empty() {
            output.push_str("## Experience\n\n");
            for entry in &resume.experience {
                output.push_str(&format!("### {}\n\n", role_line(entry)));
                let dates = date_range(&entry.start_date, &entry.end_date);
                if !dates.is_empty() {
                    output.push_str(&format!("*{}*\n\n", dates));
                }
                for achievement in &entry.achievements {
                    output.push_str(&format!("- {}\n", achievement));
                }
                output.push('\n');
            }
        }

        if !resume.education.is_empty() {
            output.push_str("## Education\n\n");
            for entry in &resume.education {
                output.push_str(&format!("**{}**, {}", entry.degree, entry.school));
                if !entry.graduation_date.is_empty() {
                    output.push_str(&format!(" ({})", entry.graduation_date));
                }
                output.push_str("\n\n");
                if !entry.details.is_empty() {
                    output.push_str(&format!("{}\n\n", entry.details));
                }
            }
        }

        if !resume.skills.is_empty() {
            output.push_str(&format!("## Skills\n\n{}\n\n", resume.skills.join(", ")));
        }

        if !resume.certifications.is_empty() {
            output.push_str("## Certifications\n\n");
            for cert in &resume.certifications {
                let mut line = format!("- {}", cert.name);
                if !cert.issuer.is_empty() {
                    line.push_str(&format!(", {}", cert.issuer));
                }
                if !cert.date.is_empty() {
                    line.push_str(&format!(" ({})", cert.date));
                }
                output.push_str(&line);
                output.push('\n');
            }
            output.push('\n');
        }

        if !resume.projects.is_empty() {
            output.push_str("## Projects\n\n");
            for project in &resume.projects {
                output.push_str(&format!("### {}\n\n", project.name));
                if !project.description.is_empty() {
                    output.push_str(&format!("{}\n\n", project.description));
                }
                if !project.technologies.is_empty() {
                    output.push_str(&format!("**Technologies:** {}\n\n", project.technologies.join(", ")));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, resume: &ResumeData) -> HtmlTemplate {
        let contact = contact_items(resume);

        let experience_html = resume
            .experience
            .iter()
            .map(|entry| {
                let achievements = entry
                    .achievements
                    .iter()
                    .map(|a| format!("    <li>{}</li>", escape_html(a)))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "<div class=\"entry\">\n  <div class=\"entry-head\"><strong>{}</strong><span class=\"dates\">{}</span></div>\n  <ul>\n{}\n  </ul>\n</div>",
                    escape_html(&role_line(entry)),
                    escape_html(&date_range(&entry.start_date, &entry.end_date)),
                    achievements
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let education_html = resume
            .education
            .iter()
            .map(|entry| {
                let details = if entry.details.is_empty() {
                    String::new()
                } else {
                    format!("\n  <p>{}</p>", escape_html(&entry.details))
                };
                format!(
                    "<div class=\"entry\">\n  <div class=\"entry-head\"><span><strong>{}</strong>, {}</span><span class=\"dates\">{}</span></div>{}\n</div>",
                    escape_html(&entry.degree),
                    escape_html(&entry.school),
                    escape_html(&entry.graduation_date),
                    details
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let skills_html = resume
            .skills
            .iter()
            .map(|s| format!("<span>{}</span>", escape_html(s)))
            .collect::<Vec<_>>()
            .join(" ");

        let certifications_html = format!(
            "<ul>\n{}\n</ul>",
            resume
                .certifications
                .iter()
                .map(|c| {
                    let details = [c.issuer.as_str(), c.date.as_str()]
                        .into_iter()
                        .filter(|s| !s.is_empty())
                        .map(escape_html)
                        .collect::<Vec<_>>()
                        .join(", ");
                    if details.is_empty() {
                        format!("  <li>{}</li>", escape_html(&c.name))
                    } else {
                        format!("  <li>{} <small>({})</small></li>", escape_html(&c.name), details)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        );

        let projects_html = resume
            .projects
            .iter()
            .map(|p| {
                let technologies = if p.technologies.is_empty() {
                    String::new()
                } else {
                    format!("\n  <p><em>{}</em></p>", escape_html(&p.technologies.join(", ")))
                };
                format!(
                    "<div class=\"entry\">\n  <strong>{}</strong>\n  <p>{}</p>{}\n</div>",
                    escape_html(&p.name),
                    escape_html(&p.description),
                    technologies
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        HtmlTemplate {
            include_styles: self.include_styles,
            title: format!("{} - Resume", display_name(resume)),
            name: display_name(resume).to_string(),
            has_contact: !contact.is_empty(),
            contact_html: contact.iter().map(|c| escape_html(c)).collect::<Vec<_>>().join(" &middot; "),
            has_summary: !resume.summary.is_empty(),
            summary: resume.summary.clone(),
            has_experience: !resume.experience.is_empty(),
            experience_html,
            has_education: !resume.education.is_empty(),
            education_html,
            has_skills: !resume.skills.is_empty(),
            skills_html,
            has_certifications: !resume.certifications.is_empty(),
            certifications_html,
            has_projects: !resume.projects.is_empty(),
            projects_html,
        }
    }
}

impl ResumeFormatter for HtmlFormatter {
    fn format_resume(&self, resume: &ResumeData) -> Result<String> {
        let template_data = self.create_template_data(resume);
        Ok(template_data.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ExportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_html_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
            html_formatter: HtmlFormatter::new(include_html_styles),
            pdf_exporter: PdfExporter::new(),
        }
    }

    /// Text rendering; PDF has no text form
    pub fn generate_text(&self, resume: &ResumeData, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_resume(resume),
            OutputFormat::Json => self.json_formatter.format_resume(resume),
            OutputFormat::Markdown => self.markdown_formatter.format_resume(resume),
            OutputFormat::Html => self.html_formatter.format_resume(resume),
            OutputFormat::Pdf => Err(InterviewError::UnsupportedFormat(
                "PDF output is binary; save it to a file instead".to_string(),
            )),
        }
    }

    /// File contents for any format
    pub fn generate(&self, resume: &ResumeData, format: OutputFormat) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Pdf => self.pdf_exporter.render(resume),
            _ => Ok(self.generate_text(resume, format)?.into_bytes()),
        }
    }
}

impl Default for ExportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_to_file(content: &[u8], file_path: &Path) -> Result<()> {
    use std::fs;

    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(file_path, content)?;
    Ok(())
}

/// Infer the export format from a file extension
pub fn format_for_path(path: &Path) -> Option<OutputFormat> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "json" => Some(OutputFormat::Json),
        "md" | "markdown" => Some(OutputFormat::Markdown),
        "html" | "htm" => Some(OutputFormat::Html),
        "pdf" => Some(OutputFormat::Pdf),
        "txt" => Some(OutputFormat::Console),
        _ => None,
    }
}

pub fn suggest_filename(format: OutputFormat, name: &str, timestamp: bool) -> String {
    let base_name = if name.trim().is_empty() {
        "resume".to_string()
    } else {
        format!(
            "{}_resume",
            name.split_whitespace().collect::<Vec<&str>>().join("_").to_lowercase()
        )
    };

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
        OutputFormat::Pdf => "pdf",
    };

    format!("{}{}.{}", base_name, timestamp_suffix, extension)
}
