//! Bundled sample report for demo flows and tests.

/// A complete, unremarkable blood test report.
pub const SAMPLE_REPORT: &str = "BLOOD TEST REPORT
Date: 15/03/2024
Laboratory: HealthCare Diagnostics

COMPLETE BLOOD COUNT (CBC)
Hemoglobin: 13.5 g/dL (Reference: 12.0-15.5)
White Blood Cells: 7,500 /\u{b5}L (Reference: 4,000-11,000)
Platelets: 250,000 /\u{b5}L (Reference: 150,000-450,000)
Red Blood Cells: 4.8 M/\u{b5}L (Reference: 4.0-5.2)
Hematocrit: 41% (Reference: 36-46%)

METABOLIC PANEL
Glucose (Fasting): 95 mg/dL (Reference: 70-100)
Creatinine: 0.9 mg/dL (Reference: 0.6-1.2)
BUN: 15 mg/dL (Reference: 7-20)
Sodium: 140 mEq/L (Reference: 135-145)
Potassium: 4.0 mEq/L (Reference: 3.5-5.0)

LIPID PROFILE
Total Cholesterol: 180 mg/dL (Reference: <200)
HDL Cholesterol: 55 mg/dL (Reference: >40)
LDL Cholesterol: 100 mg/dL (Reference: <100)
Triglycerides: 150 mg/dL (Reference: <150)

LIVER FUNCTION
ALT: 25 U/L (Reference: 7-56)
AST: 24 U/L (Reference: 10-40)
Alkaline Phosphatase: 70 U/L (Reference: 44-147)
Total Bilirubin: 0.8 mg/dL (Reference: 0.3-1.2)

THYROID FUNCTION
TSH: 2.5 \u{b5}IU/mL (Reference: 0.4-4.0)
T4: 1.2 ng/dL (Reference: 0.8-1.8)

Additional Notes:
All values are within normal reference ranges.
No significant abnormalities detected.
";
