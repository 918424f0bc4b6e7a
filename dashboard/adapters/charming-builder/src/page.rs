use domain_model::{ChartSection, ChecklistItem, CorrelationTable, DashboardView, Kpi, PlotSpec};

use crate::builder::build_chart;

static ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.4.2/dist/echarts.min.js";

static STYLE: &str = "body{font-family:Arial,sans-serif;padding:20px;background-color:#f4f6f8}\
h1{text-align:center;color:#333}\
.kpis{display:flex;justify-content:space-around;margin-bottom:30px}\
.kpi,.section{background-color:white;border-radius:8px;box-shadow:0 2px 4px rgba(0,0,0,0.1)}\
.kpi{padding:15px;text-align:center;min-width:150px}\
.kpi-label{font-size:14px;color:#666}.kpi-value{font-size:24px;font-weight:bold;margin:5px 0}.kpi-change{font-size:14px}\
.section{padding:20px;margin-bottom:20px}\
.section h2{border-bottom:2px solid #eee;padding-bottom:10px;margin-bottom:15px}\
.section p{color:#555;line-height:1.5}\
.checklists{display:flex;justify-content:center;gap:40px;margin-bottom:20px}\
.sectors{display:flex;justify-content:space-around}.sector{width:32%}.sector h3{text-align:center}\
table{width:80%;margin:0 auto;border-collapse:collapse}th{background-color:#ddd}\
th,td{border:1px solid #ccc;padding:8px;text-align:center}";

/// Chart element id and the plot drawn into it.
struct Mount<'a> {
    id: String,
    height: u32,
    plot: &'a PlotSpec,
}

pub(crate) fn render(view: &DashboardView, selection_url: &str) -> String {
    let mut mounts = Vec::new();
    let mut body = String::new();

    body.push_str(&format!("<h1>{}</h1>", escape(&view.title)));
    body.push_str(&kpis(&view.kpis));

    let overview = Mount { id: "chart-overview".to_string(), height: 400, plot: &view.overview.plot };
    body.push_str(&chart_section(&view.overview, &overview, ""));
    mounts.push(overview);

    let main = Mount { id: "chart-main".to_string(), height: 500, plot: &view.exploratory.chart.plot };
    let checklists = format!(
        "<div class=\"checklists\"><div><strong>Ações (Métricas):</strong>{}</div><div><strong>Indicadores Econômicos:</strong>{}</div></div>",
        checklist("stocks", &view.exploratory.stocks),
        checklist("indicators", &view.exploratory.indicators));
    body.push_str(&chart_section(&view.exploratory.chart, &main, &checklists));
    mounts.push(main);

    body.push_str(&format!("<div class=\"section\"><h2>{}</h2><div class=\"sectors\">", escape(&view.sectors.title)));
    for (index, panel) in view.sectors.panels.iter().enumerate() {
        let mount = Mount { id: format!("chart-sector-{index}"), height: 250, plot: &panel.plot };
        body.push_str(&format!("<div class=\"sector\"><h3>{}</h3>{}</div>", escape(&panel.sector), container(&mount)));
        mounts.push(mount);
    }
    body.push_str("</div></div>");

    body.push_str(&correlation(&view.correlation));

    format!("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
        <script src=\"{ECHARTS_URL}\"></script><style>{STYLE}</style></head>\
        <body>{body}<script>{script}</script></body></html>",
            title = escape(&view.title),
            script = script(&mounts, selection_url))
}

fn kpis(kpis: &[Kpi]) -> String {
    let cards: String = kpis.iter()
        .map(|kpi| format!(
            "<div class=\"kpi\"><div class=\"kpi-label\">{}</div><div class=\"kpi-value\">{}</div><div class=\"kpi-change\" style=\"color:{}\">{}</div></div>",
            escape(&kpi.label), escape(&kpi.value), kpi.tone.color(), escape(&kpi.change)))
        .collect();
    format!("<div class=\"kpis\">{cards}</div>")
}

fn chart_section(section: &ChartSection, mount: &Mount, controls: &str) -> String {
    format!("<div class=\"section\"><h2>{}</h2><p>{}</p>{controls}{}</div>",
            escape(&section.title), escape(&section.description), container(mount))
}

fn container(mount: &Mount) -> String {
    format!("<div id=\"{}\" style=\"width:100%;height:{}px\"></div>", mount.id, mount.height)
}

fn checklist(kind: &str, items: &[ChecklistItem]) -> String {
    items.iter()
        .map(|item| format!(
            "<div><input type=\"checkbox\" data-kind=\"{kind}\" data-id=\"{id}\"{checked}> <span style=\"color:{color}\">&#9632;</span> {label}</div>",
            id = escape(&item.id),
            checked = if item.checked { " checked" } else { "" },
            color = escape(item.color.as_str()),
            label = escape(&item.label)))
        .collect()
}

fn correlation(table: &CorrelationTable) -> String {
    let mut html = format!("<div class=\"section\"><h2>{}</h2><p>{}</p><table><thead><tr><th>{}</th>",
                           escape(&table.title), escape(&table.description), escape(&table.corner));
    for column in &table.columns {
        html.push_str(&format!("<th>{}</th>", escape(column)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        html.push_str(&format!("<tr><td>{}</td>", escape(&row.metric)));
        for value in &row.values {
            html.push_str(&format!("<td>{value:.2}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");
    html
}

/// Mounts every chart and wires the checklists to the selection endpoint.
/// Tooltips format each value with the label template of its series unit.
fn script(mounts: &[Mount], selection_url: &str) -> String {
    let mut script = String::from("const charts = [");
    for mount in mounts {
        let templates: Vec<_> = mount.plot.series.iter()
            .map(|series| format!("\"{}\"", series.unit.label_template()))
            .collect();
        script.push_str(&format!("[\"{}\", {}, [{}]],",
                       mount.id, script_safe(&build_chart(mount.plot).to_string()), templates.join(",")));
    }
    script.push_str("];");
    script.push_str("for (const [id, option, units] of charts) {\
        option.tooltip.formatter = (params) => params[0].axisValueLabel + params\
            .map((p) => '<br/>' + p.marker + p.seriesName + ': ' + (p.value === '-' ? '-' : units[p.seriesIndex].replace('{value}', p.value)))\
            .join('');\
        echarts.init(document.getElementById(id)).setOption(option);\
    }");
    script.push_str(&format!("document.querySelectorAll('input[data-kind]').forEach((input) => {{\
        input.addEventListener('change', () => {{\
            fetch(`{}/${{input.dataset.kind}}/${{encodeURIComponent(input.dataset.id)}}`, {{ method: 'POST' }})\
                .then(() => window.location.reload());\
        }});\
    }});", selection_url.trim_end_matches('/')));
    script
}

fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
