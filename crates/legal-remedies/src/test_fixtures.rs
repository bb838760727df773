/// Small hand-checked catalog used by unit tests across modules.
///
/// `orphan` deliberately references a legal type and a category that do not exist.
pub const SMALL_CATALOG: &str = r#"{
  "legalTypes": [
    { "id": "statute", "name": "Statutory Right" },
    { "id": "constitutional", "name": "Constitutional Right" }
  ],
  "categories": [
    {
      "id": "domestic",
      "name": "Domestic Violence",
      "description": "Abuse within the household",
      "keywords": ["domestic", "household", "husband"]
    },
    {
      "id": "road",
      "name": "Road Incidents",
      "description": "Accidents and disputes on public roads",
      "keywords": ["road", "accident", "traffic"]
    },
    {
      "id": "police",
      "name": "Police Misconduct",
      "description": "Illegal detention and custodial torture",
      "keywords": ["police", "arrest", "custody"]
    },
    {
      "id": "empty",
      "name": "Empty",
      "description": "Nothing here",
      "keywords": []
    }
  ],
  "remedies": [
    {
      "id": "dv-protection",
      "title": "Domestic Violence Protection Order",
      "description": "Protection for a woman facing violence at home from an abusive husband.",
      "legalReference": "Section 18 DV Act",
      "howToUse": "Contact the protection officer\nApply to the magistrate",
      "eligibility": "Women in a domestic relationship",
      "timeLimit": "Decided within sixty days",
      "authority": "Magistrate",
      "legalTypeId": "statute",
      "categoryIds": ["domestic"]
    },
    {
      "id": "road-claim",
      "title": "Road Accident Claim",
      "description": "Compensation after a road accident involving a vehicle.",
      "legalReference": "Section 166 Motor Vehicles Act",
      "howToUse": "Get the police report\nFile a claim",
      "eligibility": "Injured persons",
      "timeLimit": "Six months",
      "authority": "Claims Tribunal",
      "legalTypeId": "statute",
      "categoryIds": ["road"]
    },
    {
      "id": "arrest-rights",
      "title": "Rights on Arrest",
      "description": "Safeguards against police custody and torture.",
      "legalReference": "Article 22",
      "howToUse": "Ask for grounds\nCall a lawyer",
      "eligibility": "Any arrested person",
      "timeLimit": "24 hours",
      "authority": "Magistrate",
      "legalTypeId": "constitutional",
      "categoryIds": ["police"]
    },
    {
      "id": "orphan",
      "title": "Orphan Entry",
      "description": "Entry whose legal type is missing.",
      "legalReference": "None",
      "howToUse": "Nothing",
      "eligibility": "Nobody",
      "timeLimit": "None",
      "authority": "Nobody",
      "legalTypeId": "ghost",
      "categoryIds": ["road", "ghost-category"]
    }
  ]
}"#;
