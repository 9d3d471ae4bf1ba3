//! Canned document text used when a format is not really parsed.
//!
//! Picked by filename substring so demo uploads of PDFs and Word files still
//! produce meaningful categories.

const CONTRACT: &str = "Service Agreement Contract

This Service Agreement (\"Agreement\") is entered into on January 15, 2024, between TechCorp Inc. and Global Solutions Ltd.

Terms and Conditions:
1. Service Provider agrees to provide software development services
2. Total contract value: $50,000
3. Project duration: 6 months
4. Payment terms: Net 30 days

Both parties agree to the terms outlined herein and shall comply with all applicable regulations.

Authorized by: John Smith, CEO
Contact: john.smith@techcorp.com";

const FINANCIAL: &str = "Financial Report Q4 2024

Executive Summary:
Total Revenue: $2,500,000
Operating Expenses: $1,800,000
Net Profit: $700,000

Key Performance Indicators:
- Revenue growth: 15% YoY
- Cost reduction: 8% from previous quarter
- Profit margin: 28%

Budget allocation for next quarter includes investments in technology infrastructure and human resources.

Prepared by: Sarah Johnson, CFO
Contact: sarah.johnson@company.com";

const HR: &str = "Employee Performance Review

Employee: Michael Chen
Position: Senior Software Engineer
Review Period: January 2024 - December 2024

Performance Summary:
- Successfully led 3 major projects
- Exceeded productivity targets by 20%
- Strong collaboration and mentoring skills
- Recommended for promotion

Goals for next period:
1. Lead the new AI initiative
2. Mentor junior developers
3. Complete leadership training program

Reviewed by: Emily Rodriguez, HR Manager
Contact: emily.rodriguez@company.com";

const TECHNICAL: &str = "Technical Analysis Report - AI Implementation

Project Overview:
Implementation of machine learning algorithms for document classification and natural language processing.

Technical Specifications:
- Framework: Python with TensorFlow
- Model Architecture: Transformer-based neural networks
- Training Dataset: 50,000+ labeled documents
- Accuracy Rate: 94.5%

Performance Metrics:
- Processing Speed: 100 documents/minute
- Memory Usage: 2GB RAM
- Response Time: <2 seconds

Recommendations:
1. Scale infrastructure for higher throughput
2. Implement continuous learning pipeline
3. Add multi-language support

Author: Technical Team Lead
Contact: tech@company.com";

const GENERIC: &str = "Business Document

This document contains important business information and guidelines for operational procedures.

Key Points:
- Standard operating procedures must be followed
- Quality assurance is paramount
- Customer satisfaction remains our top priority
- Compliance with industry regulations is mandatory

For additional information, please contact the relevant department manager.";

/// Sample text for an upload whose format is not parsed.
pub fn sample_text_for(filename: &str) -> &'static str {
    let name = filename.to_lowercase();
    if name.contains("contract") {
        CONTRACT
    } else if name.contains("invoice") || name.contains("financial") {
        FINANCIAL
    } else if name.contains("hr") || name.contains("employee") {
        HR
    } else if name.contains("technical") || name.contains("report") {
        TECHNICAL
    } else {
        GENERIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_selection() {
        assert!(sample_text_for("Vendor_Contract.pdf").starts_with("Service Agreement"));
        assert!(sample_text_for("invoice-22.docx").starts_with("Financial Report"));
        assert!(sample_text_for("employee_handbook.pdf").starts_with("Employee Performance"));
        assert!(sample_text_for("q3_report.pdf").starts_with("Technical Analysis"));
        assert!(sample_text_for("misc.pdf").starts_with("Business Document"));
    }
}
