//! Turns [`Aggregates`] into the page the browser renders.

use serde::Serialize;

use crate::aggregate::Aggregates;
use crate::model::StateFilter;

pub mod figure;
pub mod kpi;

pub use figure::Figure;
pub use kpi::{KpiCard, PLACEHOLDER, kpi_cards};

pub const TITLE: &str = "Dashboard de Inteligência Olist";
pub const SUBTITLE: &str = "Análise descritiva de vendas, logística e satisfação";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub id: &'static str,
    pub title: &'static str,
    pub figure: Figure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// States applied to this page; empty means all.
    pub filter: Vec<String>,
    /// Every customer state present in the unfiltered data, sorted.
    pub available_states: Vec<String>,
    pub kpis: Vec<KpiCard>,
    pub panels: Vec<Panel>,
}

pub fn render(
    agg: &Aggregates,
    filter: &StateFilter,
    available_states: Vec<String>,
) -> DashboardPage {
    let panels = vec![
        Panel {
            id: "monthly",
            title: "Evolução Mensal de Pedidos e Faturamento",
            figure: figure::monthly_figure(&agg.monthly),
        },
        Panel {
            id: "satisfaction",
            title: "Satisfação por Prazo de Entrega",
            figure: figure::satisfaction_figure(&agg.satisfaction),
        },
        Panel {
            id: "categories",
            title: "Top 10 Categorias",
            figure: figure::category_figure(&agg.categories),
        },
        Panel {
            id: "freight",
            title: "Peso do Produto x Valor do Frete",
            figure: figure::freight_figure(&agg.freight),
        },
        Panel {
            id: "states",
            title: "Clientes por Estado",
            figure: figure::states_figure(&agg.states),
        },
        Panel {
            id: "regional",
            title: "Atraso: Mesmo Estado x Interestadual",
            figure: figure::regional_figure(&agg.regional),
        },
    ];

    DashboardPage {
        title: TITLE,
        subtitle: SUBTITLE,
        filter: filter.states().to_vec(),
        available_states,
        kpis: kpi_cards(&agg.headline),
        panels,
    }
}
