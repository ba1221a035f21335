//! Planning and site conditions ("rammebetingelser")
//!
//! The area summary is read from one raw object. [`Tomteareal`],
//! [`Bebyggelse`] and [`GradAvUtnytting`] are projections of that same
//! object, each rendered as its own sub-group.

use crate::FromRecord;
use crate::models::kode::Kode;
use crate::record::Lenient;

/// Area figures for the site and the buildings on it
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Arealdisponering {
    pub tomteareal_byggeomraade: Option<Lenient<f64>>,
    pub tomteareal_som_trekkes_fra: Option<Lenient<f64>>,
    pub tomteareal_som_legges_til: Option<Lenient<f64>>,
    pub tomteareal_beregnet: Option<Lenient<f64>>,
    pub beregnet_maks_byggeareal: Option<Lenient<f64>>,
    pub areal_bebyggelse_eksisterende: Option<Lenient<f64>>,
    pub areal_bebyggelse_som_skal_rives: Option<Lenient<f64>>,
    pub areal_bebyggelse_nytt: Option<Lenient<f64>>,
    pub parkeringsareal_terreng: Option<Lenient<f64>>,
    pub areal_sum_byggesak: Option<Lenient<f64>>,
    pub beregnet_grad_av_utnytting: Option<Lenient<f64>>,
}

/// Site area sub-total
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Tomteareal {
    pub tomteareal_byggeomraade: Option<Lenient<f64>>,
    pub tomteareal_som_trekkes_fra: Option<Lenient<f64>>,
    pub tomteareal_som_legges_til: Option<Lenient<f64>>,
    pub tomteareal_beregnet: Option<Lenient<f64>>,
}

/// Built area sub-total
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Bebyggelse {
    pub areal_bebyggelse_eksisterende: Option<Lenient<f64>>,
    pub areal_bebyggelse_som_skal_rives: Option<Lenient<f64>>,
    pub areal_bebyggelse_nytt: Option<Lenient<f64>>,
    pub parkeringsareal_terreng: Option<Lenient<f64>>,
    pub areal_sum_byggesak: Option<Lenient<f64>>,
}

/// Degree of utilisation sub-total
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct GradAvUtnytting {
    pub beregnet_maks_byggeareal: Option<Lenient<f64>>,
    pub beregnet_grad_av_utnytting: Option<Lenient<f64>>,
}

/// Road access to the site
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Adkomst {
    pub er_ny_eller_endret_adkomst: Option<Lenient<bool>>,
    pub vegtype: Option<Vec<Kode>>,
    pub er_tillatelse_gitt_riks_fylkesveg: Option<Lenient<bool>>,
    pub er_tillatelse_gitt_kommunal_veg: Option<Lenient<bool>>,
    pub er_tillatelse_gitt_privat_veg: Option<Lenient<bool>>,
}

/// Water supply
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Vannforsyning {
    pub tilknytningstype: Option<Kode>,
    pub beskrivelse: Option<String>,
    pub krysser_vannforsyning_annens_grunn: Option<Lenient<bool>>,
    pub tinglyst_erklaering: Option<Lenient<bool>>,
}

/// Sewage and surface water
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Avloep {
    pub tilknytningstype: Option<Kode>,
    pub installere_vannklosett: Option<Lenient<bool>>,
    pub utslippstillatelse: Option<Lenient<bool>>,
    pub krysser_avloep_annens_grunn: Option<Lenient<bool>>,
    pub tinglyst_erklaering: Option<Lenient<bool>>,
    pub overvann_terreng: Option<Lenient<bool>>,
    pub overvann_avloepssystem: Option<Lenient<bool>>,
}

/// The zoning plan that applies to the site
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct GjeldendePlan {
    pub plantype: Option<Kode>,
    pub navn: Option<String>,
    pub formaal: Option<String>,
    pub beregningsregel_grad_av_utnytting: Option<Kode>,
    pub utnyttingsgrad: Option<Lenient<f64>>,
}

/// Another plan the site is covered by
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct AnnenPlan {
    pub plantype: Option<Kode>,
    pub navn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Plan {
    pub gjeldende_plan: Option<GjeldendePlan>,
    pub andre_planer: Option<Vec<AnnenPlan>>,
}

/// General conditions for processing the application
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct GenerelleVilkaar {
    pub oppfylles_vilkaar_for3_ukersfrist: Option<Lenient<bool>>,
    pub beroerer_tidligere1850: Option<Lenient<bool>>,
    pub forhaandskonferanse_avholdt: Option<Lenient<bool>>,
    pub paalagt_uavhengig_kontroll: Option<Lenient<bool>>,
    pub beroerer_arbeidsplasser: Option<Lenient<bool>>,
    pub utarbeide_avfallsplan: Option<Lenient<bool>>,
    pub behov_for_tillatelse: Option<Lenient<bool>>,
    pub norsk_svensk_dansk: Option<Lenient<bool>>,
}

/// Lifts and elevators
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Loefteinnretninger {
    pub er_loefteinnretning_i_bygning: Option<Lenient<bool>>,
    pub planlegges_loefteinnretning_i_bygning: Option<Lenient<bool>>,
    pub planlegges_heis: Option<Lenient<bool>>,
    pub planlegges_trappeheis: Option<Lenient<bool>>,
    pub planlegges_rulletrapp: Option<Lenient<bool>>,
    pub planlegges_loefteplattform: Option<Lenient<bool>>,
}

/// Ground safety: flood, landslide and environmental conditions
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct KravTilByggegrunn {
    pub flomutsatt_omraade: Option<Lenient<bool>>,
    pub f1: Option<Lenient<bool>>,
    pub f2: Option<Lenient<bool>>,
    pub f3: Option<Lenient<bool>>,
    pub skredutsatt_omraade: Option<Lenient<bool>>,
    pub s1: Option<Lenient<bool>>,
    pub s2: Option<Lenient<bool>>,
    pub s3: Option<Lenient<bool>>,
    pub miljoeforhold: Option<Lenient<bool>>,
}

/// Placement of the building relative to boundaries, roads and power lines
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Plassering {
    pub konflikt_hoeyspentkraftlinje: Option<Lenient<bool>>,
    pub konflikt_vann_og_avloep: Option<Lenient<bool>>,
    pub minste_avstand_nabogrense: Option<Lenient<f64>>,
    pub minste_avstand_til_annen_bygning: Option<Lenient<f64>>,
    pub minste_avstand_til_midten_av_vei: Option<Lenient<f64>>,
    pub bekreftet_innenfor_byggegrense: Option<Lenient<bool>>,
}

/// Cultural heritage on or near the site
#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Kulturminner {
    pub beroerer_kulturminne: Option<Lenient<bool>>,
    pub beskrivelse: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, FromRecord)]
pub struct Rammebetingelser {
    pub adkomst: Option<Adkomst>,
    pub arealdisponering: Option<Arealdisponering>,
    pub generelle_vilkaar: Option<GenerelleVilkaar>,
    pub krav_til_byggegrunn: Option<KravTilByggegrunn>,
    pub loefteinnretninger: Option<Loefteinnretninger>,
    pub plan: Option<Plan>,
    pub vannforsyning: Option<Vannforsyning>,
    pub avloep: Option<Avloep>,
    pub plassering: Option<Plassering>,
    pub kulturminner: Option<Kulturminner>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presence::HasValue;
    use serde_json::json;

    #[test]
    fn test_projections_share_the_raw_object() {
        let raw = json!({
            "tomtearealBeregnet": 812.5,
            "arealBebyggelseNytt": "120,5",
            "beregnetGradAvUtnytting": 30
        });
        let tomteareal = Tomteareal::from_record(&raw, None);
        let bebyggelse = Bebyggelse::from_record(&raw, None);
        let grad = GradAvUtnytting::from_record(&raw, None);
        assert_eq!(tomteareal.tomteareal_beregnet, Some(Lenient::Typed(812.5)));
        assert_eq!(bebyggelse.areal_bebyggelse_nytt, Some(Lenient::Typed(120.5)));
        assert_eq!(grad.beregnet_grad_av_utnytting, Some(Lenient::Typed(30.0)));
        assert!(grad.beregnet_maks_byggeareal.is_none());
    }

    #[test]
    fn test_zero_is_a_value() {
        let bebyggelse = Bebyggelse::from_record(&json!({"arealSumByggesak": 0}), None);
        assert!(bebyggelse.has_value());
    }

    #[test]
    fn test_nested_rammebetingelser() {
        let rammebetingelser = Rammebetingelser::from_record(
            &json!({
                "adkomst": {"erNyEllerEndretAdkomst": true, "vegtype": [{"kodeverdi": "KommunalVeg"}]},
                "plan": {"gjeldendePlan": {"navn": "Reguleringsplan Sentrum"}, "andrePlaner": []},
                "avloep": null
            }),
            None,
        );
        let adkomst = rammebetingelser.adkomst.unwrap();
        assert_eq!(adkomst.er_ny_eller_endret_adkomst, Some(Lenient::Typed(true)));
        assert_eq!(adkomst.vegtype.map(|vegtype| vegtype.len()), Some(1));
        let plan = rammebetingelser.plan.unwrap();
        assert_eq!(plan.andre_planer, Some(vec![]));
        assert!(rammebetingelser.avloep.is_none());
        assert!(rammebetingelser.vannforsyning.is_none());
    }

    #[test]
    fn test_plassering_distances() {
        let plassering = Plassering::from_record(
            &json!({
                "minsteAvstandNabogrense": "4,5",
                "minsteAvstandTilMidtenAvVei": "over 15",
                "bekreftetInnenforByggegrense": true
            }),
            None,
        );
        assert_eq!(plassering.minste_avstand_nabogrense, Some(Lenient::Typed(4.5)));
        assert_eq!(
            plassering.minste_avstand_til_midten_av_vei,
            Some(Lenient::Raw(json!("over 15")))
        );
        assert_eq!(plassering.konflikt_hoeyspentkraftlinje, None);

        let rammebetingelser =
            Rammebetingelser::from_record(&json!({"kulturminner": {"beroererKulturminne": false}}), None);
        assert!(rammebetingelser.kulturminner.has_value());
        assert!(rammebetingelser.plassering.is_none());
    }

    #[test]
    fn test_digit_suffixed_keys() {
        let vilkaar = GenerelleVilkaar::from_record(
            &json!({"oppfyllesVilkaarFor3Ukersfrist": true, "beroererTidligere1850": false}),
            None,
        );
        assert_eq!(vilkaar.oppfylles_vilkaar_for3_ukersfrist, Some(Lenient::Typed(true)));
        assert_eq!(vilkaar.beroerer_tidligere1850, Some(Lenient::Typed(false)));
    }
}
