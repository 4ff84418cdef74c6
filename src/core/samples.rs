//! Built-in sample cases

use crate::types::Posture;
use crate::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCase {
    pub id: &'static str,
    pub title: &'static str,
    pub docket: &'static str,
    pub posture: Posture,
    pub text: &'static str,
}

pub const SAMPLE_CASES: [SampleCase; 4] = [
    SampleCase {
        id: "louisiana",
        title: "Louisiana v. Callais",
        docket: "24-109",
        posture: Posture::Merits,
        text: LOUISIANA_TEXT,
    },
    SampleCase {
        id: "trump-tariffs",
        title: "Trump v. V.O.S. Selections",
        docket: "24-892",
        posture: Posture::Merits,
        text: TRUMP_TARIFFS_TEXT,
    },
    SampleCase {
        id: "ftc-removal",
        title: "Trump v. Slaughter",
        docket: "24-631",
        posture: Posture::Merits,
        text: FTC_REMOVAL_TEXT,
    },
    SampleCase {
        id: "williams-reed",
        title: "Williams v. Reed",
        docket: "23-191",
        posture: Posture::Merits,
        text: WILLIAMS_REED_TEXT,
    },
];

/// Look up a sample by id
pub fn sample(id: &str) -> Result<&'static SampleCase, EngineError> {
    SAMPLE_CASES
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| EngineError::UnknownSample(id.to_string()))
}

// =============================================================================
// BRIEF TEXTS
// =============================================================================

const LOUISIANA_TEXT: &str = r#"PETITION FOR WRIT OF CERTIORARI

Louisiana v. Callais (consolidated with Robinson v. Callais)
No. 24-109, No. 24-110
Supreme Court of the United States

QUESTIONS PRESENTED

1. Whether the intentional creation of a second majority-minority congressional district to remedy a likely Voting Rights Act violation violates the Fourteenth or Fifteenth Amendments to the United States Constitution.

2. Whether the district court erred in finding that race predominated in the Louisiana legislature's enactment of SB 8, the challenged redistricting plan.

3. Whether the district court erred in finding that SB 8 fails strict scrutiny.

4. Whether the district court erred in subjecting SB 8 to the preconditions specified in Thornburg v. Gingles, 478 U.S. 30 (1986).

STATEMENT OF THE CASE

Following the 2020 Census, Louisiana redrew its congressional districts. Black voters constitute approximately one-third of Louisiana's population. The initial 2022 map created only one majority-Black congressional district out of six total seats.

Civil rights organizations and Black voters challenged the map under Section 2 of the Voting Rights Act, alleging vote dilution. The district court found a likely Section 2 violation and ordered Louisiana to create a remedial map with a second majority-Black district.

In January 2024, Louisiana enacted SB 8, creating two majority-Black congressional districts (Districts 2 and 6). Non-African American voters (the Callais plaintiffs) then challenged SB 8 as unconstitutional racial gerrymandering under Shaw v. Reno, 509 U.S. 630 (1993), and Miller v. Johnson, 515 U.S. 900 (1995).

The Louisiana legislature convened an extraordinary session to adopt a remedial plan after the Fifth Circuit declined to disturb the preliminary injunction. Legislators considered several alternatives, including plans that placed the second majority-Black district along the Red River corridor and plans that kept it anchored in the Baton Rouge region. The enacted plan follows the I-49 corridor and joins communities in Shreveport, Alexandria, Lafayette, and Baton Rouge.

Members of the legislature stated on the record that the plan was designed to satisfy the district court's remedial order, protect incumbents of both parties, and preserve the seats held by the Speaker of the United States House of Representatives and the House Majority Leader. The legislative record contains testimony about communities of interest, population shifts, and the use of parish lines as building blocks for the new districts.

A three-judge district court struck down SB 8, finding that race was the predominant factor in drawing the new districts and that the State failed to demonstrate a compelling interest because it had not proven an actual Section 2 violation.

ARGUMENT

The core tension in this case is between compliance with the Voting Rights Act and the Equal Protection Clause's prohibition on racial gerrymandering. Under Shaw v. Reno and its progeny, race-conscious redistricting triggers strict scrutiny. The State argues compliance with Section 2 of the VRA constitutes a compelling governmental interest.

However, as this Court held in Cooper v. Harris, 581 U.S. 285 (2017), even good-faith efforts to comply with the VRA cannot justify racial sorting if a race-neutral alternative would suffice. The question is whether preemptive VRA compliance—before a final adjudication of liability—can ever satisfy strict scrutiny.

This case also implicates the ongoing vitality of Thornburg v. Gingles and the relationship between Allen v. Milligan, 599 U.S. 1 (2023), which reaffirmed the Gingles framework, and constitutional limits on race-conscious remedies.

The district court treated the legislature's acknowledgment of the racial target as dispositive. But a legislature that knows the racial composition of the districts it draws has not, for that reason alone, subordinated traditional principles to race. The proper inquiry asks whether race, rather than politics, incumbency, and communities of interest, explains the lines actually drawn. The record here shows that political considerations shaped the configuration of District 6 as much as any demographic target.

The decision below also places States in an untenable position. A State that declines to draw a remedial district faces liability under Section 2; a State that draws one faces a racial gerrymandering claim from a different set of voters. Nothing in this Court's precedents requires a State to await a final judgment of liability before acting on strong evidence that its existing map dilutes minority voting strength. Bethune-Hill v. Virginia State Bd. of Elections, 580 U.S. 178 (2017), confirms that a State may act on good reasons to believe the law requires a remedy.

Finally, the district court failed to give appropriate weight to the presumption of legislative good faith recognized in Abbott v. Perez, 585 U.S. 579 (2018), and Alexander v. South Carolina State Conference of the NAACP, 602 U.S. 1 (2024). Where the evidence is equally consistent with political motivations, the challengers have not carried their burden of showing that race predominated.

CONCLUSION

The judgment of the district court should be reversed."#;

const TRUMP_TARIFFS_TEXT: &str = r#"PETITION FOR WRIT OF CERTIORARI

Trump v. V.O.S. Selections, Inc. (consolidated with Learning Resources v. Trump)
No. 24-892
Supreme Court of the United States

QUESTIONS PRESENTED

1. Whether the International Emergency Economic Powers Act (IEEPA) of 1977, 50 U.S.C. § 1701 et seq., authorizes the President to impose tariffs on imported goods.

2. If IEEPA authorizes presidential tariffs, whether such delegation of taxing authority violates the nondelegation doctrine under Article I, Section 8 of the Constitution.

STATEMENT OF THE CASE

In 2025, President Trump invoked the International Emergency Economic Powers Act to declare a national emergency based on the United States trade deficit with various nations. Pursuant to this declaration, the President imposed sweeping tariffs on imported goods from multiple countries, including tariffs ranging from 10% to 145% on products from China, the European Union, and other trading partners.

Multiple importers challenged the tariffs, arguing that IEEPA does not authorize the President to impose tariffs—a power constitutionally vested in Congress under the Import-Export Clause and the Taxing Power. The challengers also argued that even if IEEPA could be read to permit tariffs, such a broad delegation of Congress's taxing authority would violate the nondelegation doctrine.

The district court granted a preliminary injunction. The Court of Appeals for the Federal Circuit affirmed, holding that IEEPA's grant of authority to "regulate" commerce does not encompass the power to impose tariffs, which are taxes historically requiring explicit congressional authorization.

ARGUMENT

I. IEEPA's Text Does Not Authorize Tariffs

IEEPA authorizes the President, upon declaring a national emergency, to "regulate" and "prohibit" various transactions. 50 U.S.C. § 1702(a)(1)(B). However, tariffs are not mere regulations—they are taxes imposed on imports. The Constitution explicitly grants Congress the power "To lay and collect Taxes, Duties, Imposts and Excises." U.S. Const. art. I, § 8, cl. 1.

As this Court explained in Youngstown Sheet & Tube Co. v. Sawyer, 343 U.S. 579 (1952), presidential power must derive from an act of Congress or the Constitution itself. No statute has ever been understood to delegate wholesale tariff authority to the Executive.

II. If IEEPA Authorizes Tariffs, It Violates the Nondelegation Doctrine

Even if IEEPA could be construed to authorize tariffs, such a delegation would lack the "intelligible principle" required under the nondelegation doctrine. See Gundy v. United States, 139 S. Ct. 2116 (2019). The power to tax imports at any rate, on any goods, from any country, based solely on a presidential emergency declaration, would represent the most sweeping delegation of legislative authority in American history.

CONCLUSION

The judgment of the Court of Appeals should be affirmed."#;

const FTC_REMOVAL_TEXT: &str = r#"PETITION FOR WRIT OF CERTIORARI

Trump v. Slaughter
No. 24-631
Supreme Court of the United States

QUESTIONS PRESENTED

1. Whether the statutory removal protections for members of the Federal Trade Commission, which permit removal only for "inefficiency, neglect of duty, or malfeasance in office," violate the separation of powers.

2. Whether Humphrey's Executor v. United States, 295 U.S. 602 (1935), should be overruled or limited to permit presidential removal of FTC commissioners at will.

STATEMENT OF THE CASE

The Federal Trade Commission Act provides that FTC commissioners may be removed by the President only for "inefficiency, neglect of duty, or malfeasance in office." 15 U.S.C. § 41. This for-cause removal protection was upheld in Humphrey's Executor v. United States, 295 U.S. 602 (1935).

In 2025, President Trump dismissed two FTC commissioners, citing policy disagreements over antitrust enforcement priorities. The dismissed commissioners filed suit, arguing their removal violated the statutory for-cause protection.

The district court granted injunctive relief, reinstating the commissioners. The Court of Appeals for the D.C. Circuit affirmed, holding that Humphrey's Executor remains binding precedent and that the FTC's multi-member, bipartisan structure distinguishes it from the single-director agencies addressed in Seila Law LLC v. CFPB, 591 U.S. ___ (2020).

ARGUMENT

I. The Unitary Executive Requires At-Will Removal

Article II vests "the executive Power" in the President alone. U.S. Const. art. II, § 1. This Court has repeatedly affirmed that the President must have control over those who exercise executive power. See Myers v. United States, 272 U.S. 52 (1926); Seila Law LLC v. CFPB, 591 U.S. ___ (2020).

Humphrey's Executor carved out an exception for "quasi-legislative" and "quasi-judicial" agencies. But this Court has since rejected the premise that Article II permits congressional creation of a "headless fourth branch." Free Enterprise Fund v. PCAOB, 561 U.S. 477, 483 (2010).

II. Humphrey's Executor Should Be Overruled

Humphrey's Executor rested on distinctions between "purely executive" officers and those exercising "quasi-legislative" functions—distinctions this Court has since questioned. See Morrison v. Olson, 487 U.S. 654 (1988) (Scalia, J., dissenting). Modern separation-of-powers analysis focuses on whether removal restrictions "impede the President's ability to perform his constitutional duty." Seila Law, 591 U.S. at ___.

The FTC exercises substantial executive power, including enforcement discretion in antitrust and consumer protection matters. Shielding commissioners from presidential control undermines democratic accountability for federal policy.

III. Multi-Member Structure Does Not Save Humphrey's Executor

Respondents argue that the FTC's multi-member structure provides sufficient accountability. But the constitutional infirmity lies in removal restrictions, not headcount. A multi-member body with for-cause protection is constitutionally indistinguishable from a single director with identical protections.

CONCLUSION

The judgment of the Court of Appeals should be reversed, and Humphrey's Executor should be overruled."#;

const WILLIAMS_REED_TEXT: &str = r#"PETITION FOR WRIT OF CERTIORARI

Williams v. Reed
No. 23-191
Supreme Court of the United States

QUESTIONS PRESENTED

Whether exhaustion of state administrative remedies is required to bring claims under 42 U.S.C. § 1983 in state court.

STATEMENT OF THE CASE

Petitioners are unemployed workers in Alabama who experienced significant delays in the processing of their unemployment benefits claims. They filed suit in state court under 42 U.S.C. § 1983, alleging that the Alabama Department of Labor's delays violated their due process rights.

The Secretary of Labor moved to dismiss, arguing that the claimants failed to satisfy Alabama's administrative-exhaustion requirement. The Alabama Supreme Court affirmed the dismissal, holding that § 1983 does not preempt state exhaustion requirements.

This created a "catch-22" for the petitioners: they could not sue to expedite the administrative process without first completing the very process that was being unlawfully delayed.

ARGUMENT

I. Section 1983 Does Not Require Exhaustion

As this Court established in Patsy v. Board of Regents of Florida (1982), "exhaustion of state administrative remedies is not a prerequisite to an action under § 1983." This rule applies equally in state and federal courts. States cannot impose additional procedural hurdles that nullify federal rights.

II. State Rules Cannot Immunize Federal Violations

Under Felder v. Casey (1988), a state law that immunizes government conduct otherwise subject to suit under § 1983 is preempted by federal law. Alabama's exhaustion requirement effectively immunizes state officials from § 1983 claims challenging administrative delays.

CONCLUSION

The judgment of the Supreme Court of Alabama should be reversed."#;
