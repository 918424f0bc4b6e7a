use std::str::FromStr;

use domain_model::{CorrelationRow, CorrelationTable, Kpi, Layout, MainLayout, OverviewLayout, Period, PresentationLayout, Record, RecordTable, SectorsLayout, SeriesDefinition, Tone, Unit};

use crate::catalog::Catalog;

pub(crate) fn catalog() -> Catalog {
    Catalog::new(
        vec![
            SeriesDefinition::new("PETR4", "Petrobras (PETR4)", "#0088FE", Unit::Currency, Some("Commodities")),
            SeriesDefinition::new("VALE3", "Vale (VALE3)", "#00C49F", Unit::Currency, Some("Commodities")),
            SeriesDefinition::new("ITUB4", "Itaú (ITUB4)", "#FFBB28", Unit::Currency, Some("Financeiro")),
            SeriesDefinition::new("ELET3", "Eletrobras (ELET3)", "#FF8042", Unit::Currency, Some("Energético")),
        ],
        vec![
            SeriesDefinition::new("selic", "Taxa Selic (%)", "#FF0000", Unit::Percent, None),
            SeriesDefinition::new("ipca", "IPCA (%)", "#8884d8", Unit::Percent, None),
            SeriesDefinition::new("dolar", "Dólar (R$)", "#82ca9d", Unit::Currency, None),
        ],
    ).expect("Error during catalog creation")
}

pub(crate) fn period(input: &str) -> Period {
    Period::from_str(input).expect("Error during period parsing")
}

pub(crate) fn records() -> RecordTable {
    RecordTable::new(vec![
        Record::new(period("2022-01"), &[("ibovespa", 112000.0), ("selic", 9.25), ("ipca", 0.54), ("dolar", 5.30), ("PETR4", 33.5), ("VALE3", 80.1), ("ITUB4", 25.4)]),
        Record::new(period("2022-02"), &[("ibovespa", 113000.0), ("selic", 10.75), ("ipca", 1.01), ("dolar", 5.15), ("PETR4", 34.0), ("VALE3", 85.3), ("ITUB4", 26.1)]),
        Record::new(period("2023-01"), &[("ibovespa", 113500.0), ("selic", 13.75), ("ipca", 0.53), ("dolar", 5.10), ("PETR4", 25.2), ("VALE3", 90.5), ("ITUB4", 25.8)]),
        Record::new(period("2023-02"), &[("ibovespa", 104900.0), ("selic", 13.75), ("ipca", 0.84), ("dolar", 5.20), ("PETR4", 24.8), ("VALE3", 85.7), ("ITUB4", 24.1)]),
        Record::new(period("2024-01"), &[("ibovespa", 128000.0), ("selic", 11.25), ("ipca", 0.42), ("dolar", 4.95), ("PETR4", 40.1), ("VALE3", 72.0), ("ITUB4", 32.5)]),
    ]).expect("Error during record table creation")
}

pub(crate) fn layout() -> Layout {
    Layout {
        title: "Painel de Análise de Investimentos - SPAD03".to_string(),
        overview: OverviewLayout {
            title: "Visão Geral".to_string(),
            description: "Selic vs. Ibovespa".to_string(),
            left_title: "Pontos IBOV".to_string(),
            right_title: "Taxa Selic %".to_string(),
            left: SeriesDefinition::new("ibovespa", "Ibovespa", "#004d40", Unit::Points, None),
            right: SeriesDefinition::new("selic", "Taxa Selic", "#d32f2f", Unit::Percent, None),
        },
        main: MainLayout {
            title: "Análise Exploratória".to_string(),
            description: "Ações vs. Indicadores".to_string(),
            left_title: "Preço (R$)".to_string(),
            left_unit: Unit::Currency,
            right_title: "Taxa (%)".to_string(),
            right_unit: Unit::Percent,
        },
        sectors: SectorsLayout {
            title: "Desempenho por Setor vs. IPCA".to_string(),
            sectors: vec!["Commodities".to_string(), "Financeiro".to_string(), "Energético".to_string()],
            indicator: "ipca".to_string(),
            indicator_label: Some("IPCA".to_string()),
            margin: 5.0,
        },
        presentation: PresentationLayout {
            kpis: vec![
                Kpi { label: "IBOV".to_string(), value: "128.000 pts".to_string(), change: "+0.5%".to_string(), tone: Tone::Positive },
                Kpi { label: "SELIC".to_string(), value: "11,25%".to_string(), change: String::new(), tone: Tone::Neutral },
            ],
            correlation: CorrelationTable {
                title: "Tabela de Correlação (Exemplo)".to_string(),
                description: "Valores próximos de 1 indicam forte correlação positiva.".to_string(),
                corner: "Métrica/Indicador".to_string(),
                columns: vec!["Taxa Selic".to_string(), "IPCA".to_string(), "Dólar".to_string()],
                rows: vec![
                    CorrelationRow { metric: "Ibovespa".to_string(), values: vec![-0.65, -0.40, 0.55] },
                    CorrelationRow { metric: "VALE3".to_string(), values: vec![-0.20, 0.15, 0.70] },
                ],
            },
        },
    }
}
