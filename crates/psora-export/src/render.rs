use std::path::Path;

use tera::{Context, Tera};

use psora_instruments::assessment::AssessmentReport;

use crate::error::ExportError;

/// Built-in Markdown summary of an assessment, in the subset `generate_docx`
/// understands.
pub const DEFAULT_REPORT_TEMPLATE: &str = r#"# Psoriasis Assessment Report

**Report ID:** {{ id }}
**Generated:** {{ generated_at }}

## Patient

- **Name:** {{ patient.name }}
- **Age:** {{ patient.age }} ({{ outcome.age_band }})
- **Sex:** {{ patient.sex }}
{% if patient.mrn %}- **MRN:** {{ patient.mrn }}
{% endif -%}
{% if outcome.disease_duration %}- **Disease duration:** {{ patient.disease_duration_years }} years
{% endif -%}
{% if patient.current_treatment %}- **Current treatment:** {{ patient.current_treatment }}
{% endif -%}
{% if patient.assessment_date %}- **Assessment date:** {{ patient.assessment_date }}
{% endif %}
## Severity: {{ outcome.tier_label }}

| Measure | Score | Range |
|---|---|---|
| PASI | {{ outcome.pasi }} | 0-72 |
| BSA | {{ outcome.bsa }}% | 0-100 |
| DLQI | {{ outcome.dlqi }} | 0-30 |
{% if dlqi_impact_label %}
**Quality of life:** {{ dlqi_impact_label }}
{% endif %}
{%- if diagnostic %}
## Diagnostic Matrix

**{{ diagnostic.probability }}** probability, score {{ diagnostic.total }} of {{ diagnostic.max_total }}

| Section | Score | Max |
|---|---|---|
{% for s in diagnostic.sections -%}
| {{ s.name }} | {{ s.score }} | {{ s.max }} |
{% endfor %}
{%- endif %}
{%- if subtypes %}
## Psoriasis Types

{% for t in subtypes -%}
- **{{ t.name }}:** {{ t.description }}
{% endfor %}
{%- endif %}
{%- if pasi %}
## PASI Breakdown

| Region | Area | Erythema | Induration | Desquamation | Score |
|---|---|---|---|---|---|
{% for r in pasi.regions -%}
| {{ r.name }} | {{ r.area_percentage }}% | {{ r.erythema }} | {{ r.induration }} | {{ r.desquamation }} | {{ r.regional_pasi }} |
{% endfor %}
{%- endif %}
{%- if dlqi and dlqi.domain_scores %}
## DLQI Domains

| Domain | Score | Max |
|---|---|---|
{% for d in dlqi.domain_scores -%}
| {{ d.name }} | {{ d.score }} | {{ d.max }} |
{% endfor %}
{%- endif %}
## {{ outcome.recommendations.headline }}

{% for t in outcome.recommendations.treatments -%}
- {{ t }}
{% endfor %}
{%- if outcome.recommendations.caveats %}
### Age-specific Considerations

{% for c in outcome.recommendations.caveats -%}
- {{ c }}
{% endfor %}
{%- endif %}
### Monitoring

{% for m in outcome.recommendations.monitoring -%}
- {{ m }}
{% endfor %}
### Treatment Goals

{% for g in outcome.recommendations.goals -%}
- {{ g }}
{% endfor %}"#;

/// Render a Tera template against an assessment report.
///
/// The report's fields become the template context variables.
pub fn render_report(
    template_name: &str,
    template_content: &str,
    report: &AssessmentReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template = template_name, report_id = %report.id, "rendered report");
    Ok(rendered)
}

/// Render with the built-in template.
pub fn render_default_report(report: &AssessmentReport) -> Result<String, ExportError> {
    render_report("report.md", DEFAULT_REPORT_TEMPLATE, report)
}

/// Read a template from disk, checking that it parses.
pub fn load_template(path: &Path) -> Result<String, ExportError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ExportError::TemplateNotFound(format!("{}: {e}", path.display())))?;

    let mut tera = Tera::default();
    tera.add_raw_template("check", &content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
    Ok(content)
}
