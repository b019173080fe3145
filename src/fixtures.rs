//! Small search result shared by the parser and resolution tests

pub(crate) const SEARCH: &str = r#"MIME-Version: 1.0 (Generated by Mascot version 1.0)
Content-Type: multipart/mixed; boundary=gc0p4Jq0M2Yt08jU534c0p

--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="parameters"

LICENSE=Licensed to: Example Lab
SEARCH=MIS
COM=run01
DB=SwissProt_decoy
CLE=Trypsin
MASS=Monoisotopic
MODS=Carbamidomethyl (C)
IT_MODS=Oxidation (M),Phospho (ST)
TOL=10
TOLU=ppm
ITOL=0.5
ITOLU=Da
FILE=C:\data\run01.mgf
FORMAT=Mascot generic
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="masses"

A=71.037114
C=103.009185
M=131.040485
delta1=15.994915,Oxidation (M)
NeutralLoss1=0.000000
delta2=79.966331,Phospho (ST)
NeutralLoss2=97.976896
FixedMod1=57.021464,Carbamidomethyl (C)
FixedModResidues1=C
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="summary"

qmass1=1148.607128
qexp1=575.310840,2+
qintensity1=10254.3000
qmatch1=2641
qplughole1=0.000000
qmass2=1021.472110
qexp2=511.743331,2+
qmatch2=1302
qplughole2=0.000000
qmass3=1304.708490
qexp3=653.361521,2+
qintensity3=8321.0000
qmatch3=3017
qplughole3=12.114500
qmass4=1427.718126
qexp4=476.913240,3+
qmatch4=2203
qplughole4=0.000000
qmass5=874.369446
qexp5=438.192006,2+
qintensity5=512.0000
qmatch5=1199
qplughole5=0.000000
qmass6=1017.435321
qexp6=509.724937,2+
qmatch6=1450
qplughole6=0.000000
num_hits=0
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="peptides"

q1_p1=0,1148.607353,-0.000225,12,LVNELTEFAK,22,000000000000,45.20,0002000000000000000,0,0;"ALBU":0:66:75:1,"ALBU_ISO":0:42:51:1
q1_p1_terms=K,T:K,T
q1_p2=0,1148.570970,0.036158,6,LVNEVTEFAK,10,000000000000,12.00,0001000000000000000,0,0;"KRT1":0:310:319:1
q1_p2_terms=R,A
q2_p1=-1
q3_p1=0,1304.708634,-0.000144,14,HLVDEPQNLIK,25,0000000000000,38.00,0002000000000000000,0,0;"ALBU":0:361:371:1
q3_p1_terms=K,Q
q4_p1=0,1427.718931,-0.000805,11,AEFVEVTXLVK,20,0000000000000,30.50,0002000000000000000,0,0;"ALBU":0:42:52:1,"ALBU_ISO":0:18:28:1
q4_p1_subst=8,X,K
q4_p1_terms=K,L:K,L
q5_p1=0,874.369590,-0.000144,5,MSSPQAPK,12,0100000000,15.00,0001000000000000000,0,0;"REVERSED_KRT1":0:201:208:1
q5_p1_terms=R,A
q6_p1=0,1017.434717,0.000604,9,DLGEEHFK,16,0000000000,25.00,0002000000000000000,0,0;"KRT1":0:521:528:1
q6_p1_terms=K,G
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="proteins"

"ALBU"=69321.49,"Serum albumin"
"ALBU_ISO"=47351.02,"Serum albumin isoform 2"
"ALBU_ISO"_tax=9606
"KRT1"=66039.00,"Keratin, type II cytoskeletal 1"
"REVERSED_KRT1"=66039.00,"Decoy entry"
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="query1"

title=run01%2e1204%2e1204%2e2%20FinneganScanNumber%3a%201204%20Elution%20from%3a%2012%2e54%20to%2012%2e58%20RT%20Apex%3a%2012%2e60%20
index=1
charge=2+
mass_min=100.000000
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="query2"

title=run01%2e1250%2e1250%2e2%20FinneganScanNumber%3a%201250%20Elution%20from%3a%2013%2e01%20to%2013%2e01%20
index=2
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="query3"

title=run01%2e1311%2e1311%2e2
scans=1311
rtinseconds=852
index=3
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="query4"

title=run01%2e1402%2e1402%2e3%20FinneganScanNumber%3a%201402%20Elution%20from%3a%2016%2e80%20to%2016%2e90%20RT%20Apex%3a%2016%2e85%20
index=4
charge=3+
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="query5"

title=run01%2e1500%2e1500%2e2%20FinneganScanNumber%3a%201500%20Elution%20from%3a%2033%2e1
index=5
--gc0p4Jq0M2Yt08jU534c0p
Content-Type: application/x-Mascot; name="query6"

title=run01%2e1603%2e1603%2e2%20FinneganScanNumber%3a%201603%20
index=6
--gc0p4Jq0M2Yt08jU534c0p--
"#;
