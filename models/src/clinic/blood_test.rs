// models/src/clinic/blood_test.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::identifiers::EntityId;

/// One point of a blood panel, as consumed by the chart screens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanelPoint {
    pub name: &'static str,
    pub value: f64,
}

macro_rules! panel_fields {
    ($(($field:ident, $wire:literal)),+ $(,)?) => {
        /// A laboratory panel for a patient. Many per patient.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct BloodTest {
            #[serde(rename = "AnalisisID")]
            pub id: EntityId,
            #[serde(rename = "PacienteID")]
            pub paciente_id: EntityId,
            #[serde(rename = "FechaRealizacion", with = "dates::flexible_date_opt", default)]
            pub fecha_realizacion: Option<NaiveDate>,
            #[serde(rename = "Resultados", default)]
            pub resultados: String,
            #[serde(rename = "Observaciones", default)]
            pub observaciones: String,
            $(
                #[serde(rename = $wire, default)]
                pub $field: f64,
            )+
        }

        /// Payload for `POST /blood-tests`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct NewBloodTest {
            #[serde(rename = "PacienteID")]
            pub paciente_id: EntityId,
            #[serde(rename = "FechaRealizacion", with = "dates::flexible_date_opt", default)]
            pub fecha_realizacion: Option<NaiveDate>,
            #[serde(rename = "Resultados", default)]
            pub resultados: String,
            #[serde(rename = "Observaciones", default)]
            pub observaciones: String,
            $(
                #[serde(rename = $wire, default)]
                pub $field: f64,
            )+
        }

        impl BloodTest {
            /// The named panel values in chart order.
            pub fn panel_points(&self) -> Vec<PanelPoint> {
                vec![
                    $(PanelPoint { name: $wire, value: self.$field },)+
                ]
            }

            pub fn from_new(id: EntityId, new: &NewBloodTest) -> Self {
                BloodTest {
                    id,
                    paciente_id: new.paciente_id,
                    fecha_realizacion: new.fecha_realizacion,
                    resultados: new.resultados.clone(),
                    observaciones: new.observaciones.clone(),
                    $($field: new.$field,)+
                }
            }
        }
    };
}

panel_fields! {
    (hemoglobina, "hemoglobina"),
    (leucocitos, "leucocitos"),
    (plaquetas, "plaquetas"),
    (glucosa, "glucosa"),
    (colesterol, "colesterol"),
    (trigliceridos, "trigliceridos"),
    (hematocrito, "hematocrito"),
    (eritrocitos, "eritrocitos"),
    (urea, "urea"),
    (creatina, "creatina"),
    (hdl, "hdl"),
    (ldl, "ldl"),
    (bilirrubina, "bilirrubina"),
    (transaminasas, "transaminasas"),
    (proteina_c_reactiva, "proteina_c_reactiva"),
}

#[cfg(test)]
mod tests {
    use super::BloodTest;

    #[test]
    fn should_expose_fifteen_panel_points() {
        let raw = r#"{
            "AnalisisID": 1,
            "PacienteID": 5,
            "FechaRealizacion": "2024-04-10",
            "Resultados": "Normal",
            "Observaciones": "",
            "hemoglobina": 13.5,
            "glucosa": 92.0
        }"#;
        let test: BloodTest = serde_json::from_str(raw).unwrap();
        let points = test.panel_points();
        assert_eq!(points.len(), 15);
        assert_eq!(points[0].name, "hemoglobina");
        assert_eq!(points[0].value, 13.5);
        // Unreported values default to zero rather than failing the decode.
        assert_eq!(points[2].value, 0.0);
    }
}
