//! Group components
//!
//! A group renders one domain object with a titled entry per field. Most
//! groups differ only in their binding declaration and domain type, so they
//! share [`RecordGroup`]; the party group picks its domain path from
//! `partType`.

use std::marker::PhantomData;

use serde::Serialize;

use crate::components::Component;
use crate::models::{
    Adkomst, Arbeidsplasser, Avloep, Bruk, GenerelleVilkaar, Kontaktperson, KravTilByggegrunn,
    Loefteinnretninger, Part, Plan, Signatur, Vannforsyning, Varsling,
};
use crate::presence::HasValue;
use crate::props::Props;
use crate::record::FromRecord;
use crate::resources::{BindingSpec, FieldSpec, ResourceBindings};
use crate::view::RenderContext;

/// A group rendering one domain object of type `T`
#[derive(Debug, Clone, Copy)]
pub struct RecordGroup<T> {
    name: &'static str,
    spec: BindingSpec,
    data: PhantomData<fn() -> T>,
}

impl<T> RecordGroup<T> {
    #[must_use]
    pub const fn new(name: &'static str, spec: BindingSpec) -> Self {
        Self {
            name,
            spec,
            data: PhantomData,
        }
    }

    /// The declared bindings
    #[must_use]
    pub const fn spec(&self) -> &BindingSpec {
        &self.spec
    }
}

impl<T: FromRecord + Serialize + HasValue> Component for RecordGroup<T> {
    type Data = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn binding_spec(&self, _props: &Props) -> BindingSpec {
        self.spec
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<T> {
        T::from_optional(props.form_data(), Some(bindings))
    }
}

const KONTAKTPERSON_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("navn"),
    FieldSpec::text("telefonnummer"),
    FieldSpec::text("mobilnummer"),
    FieldSpec::text("epost"),
];

pub const KONTAKTPERSON: RecordGroup<Kontaktperson> = RecordGroup::new(
    "custom-group-kontaktperson",
    BindingSpec::new("kontaktperson", "kontaktperson", KONTAKTPERSON_FIELDS),
);

const ADKOMST_FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean_with_domain_texts("erNyEllerEndretAdkomst"),
    FieldSpec::text("vegtype"),
    FieldSpec::boolean("erTillatelseGittRiksFylkesveg"),
    FieldSpec::boolean("erTillatelseGittKommunalVeg"),
    FieldSpec::boolean("erTillatelseGittPrivatVeg"),
];

pub const ADKOMST: RecordGroup<Adkomst> = RecordGroup::new(
    "custom-group-adkomst",
    BindingSpec::new("adkomst", "rammebetingelser.adkomst", ADKOMST_FIELDS)
        .with_domain_empty_text(),
);

const VANNFORSYNING_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("tilknytningstype"),
    FieldSpec::text("beskrivelse"),
    FieldSpec::boolean("krysserVannforsyningAnnensGrunn"),
    FieldSpec::boolean("tinglystErklaering"),
];

pub const VANNFORSYNING: RecordGroup<Vannforsyning> = RecordGroup::new(
    "custom-group-vannforsyning",
    BindingSpec::new("vannforsyning", "rammebetingelser.vannforsyning", VANNFORSYNING_FIELDS)
        .with_domain_empty_text(),
);

const AVLOEP_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("tilknytningstype"),
    FieldSpec::boolean("installereVannklosett"),
    FieldSpec::boolean("utslippstillatelse"),
    FieldSpec::boolean("krysserAvloepAnnensGrunn"),
    FieldSpec::boolean("tinglystErklaering"),
    FieldSpec::boolean_with_domain_texts("overvannTerreng"),
    FieldSpec::boolean_with_domain_texts("overvannAvloepssystem"),
];

pub const AVLOEP: RecordGroup<Avloep> = RecordGroup::new(
    "custom-group-avloep",
    BindingSpec::new("avloep", "rammebetingelser.avloep", AVLOEP_FIELDS)
        .with_domain_empty_text(),
);

const PLAN_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("gjeldendePlan"),
    FieldSpec::text("plantype"),
    FieldSpec::text("navn"),
    FieldSpec::text("formaal"),
    FieldSpec::text("beregningsregelGradAvUtnytting"),
    FieldSpec::text("utnyttingsgrad"),
    FieldSpec::text("andrePlaner"),
];

pub const PLAN: RecordGroup<Plan> = RecordGroup::new(
    "custom-group-plan",
    BindingSpec::new("plan", "rammebetingelser.plan", PLAN_FIELDS),
);

const GENERELLE_VILKAAR_FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean("oppfyllesVilkaarFor3Ukersfrist"),
    FieldSpec::boolean("beroererTidligere1850"),
    FieldSpec::boolean("forhaandskonferanseAvholdt"),
    FieldSpec::boolean("paalagtUavhengigKontroll"),
    FieldSpec::boolean("beroererArbeidsplasser"),
    FieldSpec::boolean("utarbeideAvfallsplan"),
    FieldSpec::boolean("behovForTillatelse"),
    FieldSpec::boolean("norskSvenskDansk"),
];

pub const GENERELLE_VILKAAR: RecordGroup<GenerelleVilkaar> = RecordGroup::new(
    "custom-group-generelle-vilkaar",
    BindingSpec::new(
        "generelleVilkaar",
        "rammebetingelser.generelleVilkaar",
        GENERELLE_VILKAAR_FIELDS,
    ),
);

const LOEFTEINNRETNINGER_FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean_with_domain_texts("erLoefteinnretningIBygning"),
    FieldSpec::boolean_with_domain_texts("planleggesLoefteinnretningIBygning"),
    FieldSpec::boolean("planleggesHeis"),
    FieldSpec::boolean("planleggesTrappeheis"),
    FieldSpec::boolean("planleggesRulletrapp"),
    FieldSpec::boolean("planleggesLoefteplattform"),
];

pub const LOEFTEINNRETNINGER: RecordGroup<Loefteinnretninger> = RecordGroup::new(
    "custom-group-loefteinnretninger",
    BindingSpec::new(
        "loefteinnretninger",
        "rammebetingelser.loefteinnretninger",
        LOEFTEINNRETNINGER_FIELDS,
    ),
);

const KRAV_TIL_BYGGEGRUNN_FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean_with_domain_texts("flomutsattOmraade"),
    FieldSpec::boolean("f1"),
    FieldSpec::boolean("f2"),
    FieldSpec::boolean("f3"),
    FieldSpec::boolean_with_domain_texts("skredutsattOmraade"),
    FieldSpec::boolean("s1"),
    FieldSpec::boolean("s2"),
    FieldSpec::boolean("s3"),
    FieldSpec::boolean_with_domain_texts("miljoeforhold"),
];

pub const KRAV_TIL_BYGGEGRUNN: RecordGroup<KravTilByggegrunn> = RecordGroup::new(
    "custom-group-krav-til-byggegrunn",
    BindingSpec::new(
        "kravTilByggegrunn",
        "rammebetingelser.kravTilByggegrunn",
        KRAV_TIL_BYGGEGRUNN_FIELDS,
    ),
);

const ARBEIDSPLASSER_FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean("framtidige"),
    FieldSpec::boolean("faste"),
    FieldSpec::boolean("midlertidige"),
    FieldSpec::text("antallAnsatte"),
    FieldSpec::boolean("eksisterende"),
    FieldSpec::boolean("utleieBygg"),
    FieldSpec::text("antallVirksomheter"),
    FieldSpec::text("beskrivelse"),
];

pub const ARBEIDSPLASSER: RecordGroup<Arbeidsplasser> = RecordGroup::new(
    "custom-group-arbeidsplasser",
    BindingSpec::new("arbeidsplasser", "arbeidsplasser", ARBEIDSPLASSER_FIELDS),
);

const VARSLING_FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean_with_domain_texts("fritattFraNabovarsling"),
    FieldSpec::boolean_with_domain_texts("foreliggerMerknader"),
    FieldSpec::text("antallMerknader"),
    FieldSpec::text("vurderingAvMerknader"),
    FieldSpec::text("soeknadensHjemmeside"),
    FieldSpec::text("soeknadSeesKontaktperson"),
];

pub const VARSLING: RecordGroup<Varsling> = RecordGroup::new(
    "custom-group-varsling",
    BindingSpec::new("varsling", "varsling", VARSLING_FIELDS),
);

const SIGNATUR_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("signaturdato"),
    FieldSpec::text("signertAv"),
    FieldSpec::text("signertPaaVegneAv"),
];

pub const SIGNATUR: RecordGroup<Signatur> = RecordGroup::new(
    "custom-group-signatur",
    BindingSpec::new("signatur", "signatur", SIGNATUR_FIELDS),
);

const BRUK_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("anleggstype"),
    FieldSpec::text("naeringsgruppe"),
    FieldSpec::text("bygningstype"),
    FieldSpec::text("tiltaksformaal"),
    FieldSpec::text("beskrivPlanlagtFormaal"),
];

pub const BRUK: RecordGroup<Bruk> = RecordGroup::new(
    "custom-group-bruk",
    BindingSpec::new("bruk", "beskrivelseAvTiltak.bruk", BRUK_FIELDS),
);

const PART_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("partstype"),
    FieldSpec::text("navn"),
    FieldSpec::text("organisasjonsnummer"),
    FieldSpec::text("adresse"),
    FieldSpec::text("telefonnummer"),
    FieldSpec::text("mobilnummer"),
    FieldSpec::text("epost"),
    FieldSpec::text("kontaktperson"),
];

/// Party types with their own resource keys
const PART_TYPES: &[&str] = &[
    "tiltakshaver",
    "ansvarligSoeker",
    "fakturamottaker",
    "utfoerende",
    "kontrollerende",
    "prosjekterende",
];

/// A party; `partType` selects the domain path of its resource keys
#[derive(Debug, Clone, Copy, Default)]
pub struct PartGroup;

impl PartGroup {
    /// Domain path for a party type. Unknown or missing types share the
    /// generic `part` keys.
    #[must_use]
    pub fn domain(part_type: Option<&str>) -> &'static str {
        part_type
            .and_then(|part_type| PART_TYPES.iter().find(|known| **known == part_type))
            .copied()
            .unwrap_or("part")
    }
}

impl Component for PartGroup {
    type Data = Part;

    fn name(&self) -> &'static str {
        "custom-group-part"
    }

    fn binding_spec(&self, props: &Props) -> BindingSpec {
        let domain = Self::domain(props.part_type.as_deref());
        BindingSpec::new(domain, domain, PART_FIELDS)
    }

    fn value_from_form_data(
        &self,
        props: &Props,
        bindings: &ResourceBindings,
        _ctx: &RenderContext<'_>,
    ) -> Option<Part> {
        Part::from_optional(props.form_data(), Some(bindings))
    }
}
