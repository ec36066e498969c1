use rcgen::{
    BasicConstraints, CertificateParams, DistinguishedName, DnType, Issuer, KeyPair, SerialNumber,
};

// Helper function to generate a self-signed certificate PEM with a fixed serial
pub fn gen_cert_pem(serial: &[u8]) -> String {
    let mut params = CertificateParams::default();
    let key_pair = KeyPair::generate().unwrap();

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, "Keybox Attestation Key");
    params.distinguished_name = dn;
    params.serial_number = Some(SerialNumber::from(serial.to_vec()));

    params.self_signed(&key_pair).unwrap().pem()
}

// Helper function to generate a leaf certificate whose issuer DN carries a
// serialNumber attribute
pub fn gen_cert_pem_with_issuer_serial(issuer_dn_serial: &str, serial: &[u8]) -> String {
    let mut ca_params = CertificateParams::default();
    let ca_key = KeyPair::generate().unwrap();

    let mut ca_dn = DistinguishedName::new();
    ca_dn.push(DnType::CommonName, "Keybox Attestation CA");
    ca_dn.push(DnType::CustomDnType(vec![2, 5, 4, 5]), issuer_dn_serial);
    ca_params.distinguished_name = ca_dn;
    ca_params.is_ca = rcgen::IsCa::Ca(BasicConstraints::Unconstrained);
    let ca = Issuer::new(ca_params, ca_key);

    let mut params = CertificateParams::default();
    let key_pair = KeyPair::generate().unwrap();

    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, "Keybox Attestation Key");
    params.distinguished_name = dn;
    params.is_ca = rcgen::IsCa::NoCa;
    params.serial_number = Some(SerialNumber::from(serial.to_vec()));

    params.signed_by(&key_pair, &ca).unwrap().pem()
}

// Helper function to wrap certificate PEM blocks in a keybox XML document
pub fn keybox_xml(cert_pems: &[&str]) -> String {
    let mut certificates = String::new();
    for pem in cert_pems {
        certificates.push_str("        <Certificate format=\"pem\">\n");
        certificates.push_str(pem.trim());
        certificates.push_str("\n        </Certificate>\n");
    }

    format!(
        r#"<?xml version="1.0"?>
<AndroidAttestation>
  <NumberOfKeyboxes>1</NumberOfKeyboxes>
  <Keybox DeviceID="test-device">
    <Key algorithm="ecdsa">
      <CertificateChain>
        <NumberOfCertificates>{count}</NumberOfCertificates>
{certificates}      </CertificateChain>
    </Key>
  </Keybox>
</AndroidAttestation>
"#,
        count = cert_pems.len()
    )
}
