use crate::Language;

use serde::{Deserialize, Serialize};

/// One step of the fixed batch lifecycle, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Harvest,
    Processing,
    Drying,
    Transport,
    Roasting,
    Packaging,
    Distribution,
    Retail,
}

impl StageId {
    pub const ALL: [StageId; 8] = [
        Self::Harvest,
        Self::Processing,
        Self::Drying,
        Self::Transport,
        Self::Roasting,
        Self::Packaging,
        Self::Distribution,
        Self::Retail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Harvest => "harvest",
            Self::Processing => "processing",
            Self::Drying => "drying",
            Self::Transport => "transport",
            Self::Roasting => "roasting",
            Self::Packaging => "packaging",
            Self::Distribution => "distribution",
            Self::Retail => "retail",
        }
    }

    pub fn name(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Harvest, Language::Es) => "Cosecha",
            (Self::Harvest, Language::En) => "Harvest",
            (Self::Processing, Language::Es) => "Beneficio",
            (Self::Processing, Language::En) => "Processing",
            (Self::Drying, Language::Es) => "Secado",
            (Self::Drying, Language::En) => "Drying",
            (Self::Transport, Language::Es) => "Transporte",
            (Self::Transport, Language::En) => "Transport",
            (Self::Roasting, Language::Es) => "Tostión",
            (Self::Roasting, Language::En) => "Roasting",
            (Self::Packaging, Language::Es) => "Empaque",
            (Self::Packaging, Language::En) => "Packaging",
            (Self::Distribution, Language::Es) => "Distribución",
            (Self::Distribution, Language::En) => "Distribution",
            (Self::Retail, Language::Es) => "Venta",
            (Self::Retail, Language::En) => "Retail",
        }
    }

    pub fn description(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Harvest, Language::Es) => "Recolección manual de cerezas maduras en la finca.",
            (Self::Harvest, Language::En) => "Hand-picking of ripe cherries at the farm.",
            (Self::Processing, Language::Es) => "Despulpado y fermentación del grano.",
            (Self::Processing, Language::En) => "Pulping and fermentation of the beans.",
            (Self::Drying, Language::Es) => "Secado del pergamino hasta la humedad ideal.",
            (Self::Drying, Language::En) => "Drying the parchment down to ideal moisture.",
            (Self::Transport, Language::Es) => "Traslado del café verde desde el origen.",
            (Self::Transport, Language::En) => "Moving the green coffee from origin.",
            (Self::Roasting, Language::Es) => "Tueste para desarrollar el perfil de sabor.",
            (Self::Roasting, Language::En) => "Roasting to develop the flavor profile.",
            (Self::Packaging, Language::Es) => "Empacado en bolsas con válvula.",
            (Self::Packaging, Language::En) => "Packed into one-way valve bags.",
            (Self::Distribution, Language::Es) => "Envío a tiendas y clientes.",
            (Self::Distribution, Language::En) => "Shipped to stores and customers.",
            (Self::Retail, Language::Es) => "Disponible para la venta al público.",
            (Self::Retail, Language::En) => "Available for sale to the public.",
        }
    }
}

impl std::fmt::Display for StageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
