// DO NOT EDIT. Generated by data/create-tables.py from the IANA Time
// Zone Database (tzdata 2025b).

use crate::generated::abbreviation::Abbreviation;
use crate::generated::timezone::TimeZone;
use crate::rule::Rule;

static RULES_AMERICA_CHICAGO: [Rule; 237] = [
    Rule::new(-34359738367, Abbreviation::LMT, -21036, false),
    Rule::new(-2717647200, Abbreviation::CST, -21600, false),
    Rule::new(-1633276800, Abbreviation::CDT, -18000, true),
    Rule::new(-1615136400, Abbreviation::CST, -21600, false),
    Rule::new(-1601827200, Abbreviation::CDT, -18000, true),
    Rule::new(-1583686800, Abbreviation::CST, -21600, false),
    Rule::new(-1563724800, Abbreviation::CDT, -18000, true),
    Rule::new(-1551632400, Abbreviation::CST, -21600, false),
    Rule::new(-1538928000, Abbreviation::CDT, -18000, true),
    Rule::new(-1520182800, Abbreviation::CST, -21600, false),
    Rule::new(-1504454400, Abbreviation::CDT, -18000, true),
    Rule::new(-1491757200, Abbreviation::CST, -21600, false),
    Rule::new(-1473004800, Abbreviation::CDT, -18000, true),
    Rule::new(-1459702800, Abbreviation::CST, -21600, false),
    Rule::new(-1441555200, Abbreviation::CDT, -18000, true),
    Rule::new(-1428253200, Abbreviation::CST, -21600, false),
    Rule::new(-1410105600, Abbreviation::CDT, -18000, true),
    Rule::new(-1396803600, Abbreviation::CST, -21600, false),
    Rule::new(-1378656000, Abbreviation::CDT, -18000, true),
    Rule::new(-1365354000, Abbreviation::CST, -21600, false),
    Rule::new(-1347206400, Abbreviation::CDT, -18000, true),
    Rule::new(-1333904400, Abbreviation::CST, -21600, false),
    Rule::new(-1315152000, Abbreviation::CDT, -18000, true),
    Rule::new(-1301850000, Abbreviation::CST, -21600, false),
    Rule::new(-1283702400, Abbreviation::CDT, -18000, true),
    Rule::new(-1270400400, Abbreviation::CST, -21600, false),
    Rule::new(-1252252800, Abbreviation::CDT, -18000, true),
    Rule::new(-1238950800, Abbreviation::CST, -21600, false),
    Rule::new(-1220803200, Abbreviation::CDT, -18000, true),
    Rule::new(-1207501200, Abbreviation::CST, -21600, false),
    Rule::new(-1189353600, Abbreviation::CDT, -18000, true),
    Rule::new(-1176051600, Abbreviation::CST, -21600, false),
    Rule::new(-1157299200, Abbreviation::CDT, -18000, true),
    Rule::new(-1144602000, Abbreviation::CST, -21600, false),
    Rule::new(-1125849600, Abbreviation::CDT, -18000, true),
    Rule::new(-1112547600, Abbreviation::CST, -21600, false),
    Rule::new(-1094400000, Abbreviation::CDT, -18000, true),
    Rule::new(-1081098000, Abbreviation::CST, -21600, false),
    Rule::new(-1067788800, Abbreviation::EST, -18000, false),
    Rule::new(-1045414800, Abbreviation::CST, -21600, false),
    Rule::new(-1031500800, Abbreviation::CDT, -18000, true),
    Rule::new(-1018198800, Abbreviation::CST, -21600, false),
    Rule::new(-1000051200, Abbreviation::CDT, -18000, true),
    Rule::new(-986749200, Abbreviation::CST, -21600, false),
    Rule::new(-967996800, Abbreviation::CDT, -18000, true),
    Rule::new(-955299600, Abbreviation::CST, -21600, false),
    Rule::new(-936547200, Abbreviation::CDT, -18000, true),
    Rule::new(-923245200, Abbreviation::CST, -21600, false),
    Rule::new(-905097600, Abbreviation::CDT, -18000, true),
    Rule::new(-891795600, Abbreviation::CST, -21600, false),
    Rule::new(-880214400, Abbreviation::CWT, -18000, true),
    Rule::new(-769395600, Abbreviation::CPT, -18000, true),
    Rule::new(-765392400, Abbreviation::CST, -21600, false),
    Rule::new(-747244800, Abbreviation::CDT, -18000, true),
    Rule::new(-733942800, Abbreviation::CST, -21600, false),
    Rule::new(-715795200, Abbreviation::CDT, -18000, true),
    Rule::new(-702493200, Abbreviation::CST, -21600, false),
    Rule::new(-684345600, Abbreviation::CDT, -18000, true),
    Rule::new(-671043600, Abbreviation::CST, -21600, false),
    Rule::new(-652896000, Abbreviation::CDT, -18000, true),
    Rule::new(-639594000, Abbreviation::CST, -21600, false),
    Rule::new(-620841600, Abbreviation::CDT, -18000, true),
    Rule::new(-608144400, Abbreviation::CST, -21600, false),
    Rule::new(-589392000, Abbreviation::CDT, -18000, true),
    Rule::new(-576090000, Abbreviation::CST, -21600, false),
    Rule::new(-557942400, Abbreviation::CDT, -18000, true),
    Rule::new(-544640400, Abbreviation::CST, -21600, false),
    Rule::new(-526492800, Abbreviation::CDT, -18000, true),
    Rule::new(-513190800, Abbreviation::CST, -21600, false),
    Rule::new(-495043200, Abbreviation::CDT, -18000, true),
    Rule::new(-481741200, Abbreviation::CST, -21600, false),
    Rule::new(-463593600, Abbreviation::CDT, -18000, true),
    Rule::new(-447267600, Abbreviation::CST, -21600, false),
    Rule::new(-431539200, Abbreviation::CDT, -18000, true),
    Rule::new(-415818000, Abbreviation::CST, -21600, false),
    Rule::new(-400089600, Abbreviation::CDT, -18000, true),
    Rule::new(-384368400, Abbreviation::CST, -21600, false),
    Rule::new(-368640000, Abbreviation::CDT, -18000, true),
    Rule::new(-352918800, Abbreviation::CST, -21600, false),
    Rule::new(-337190400, Abbreviation::CDT, -18000, true),
    Rule::new(-321469200, Abbreviation::CST, -21600, false),
    Rule::new(-305740800, Abbreviation::CDT, -18000, true),
    Rule::new(-289414800, Abbreviation::CST, -21600, false),
    Rule::new(-273686400, Abbreviation::CDT, -18000, true),
    Rule::new(-257965200, Abbreviation::CST, -21600, false),
    Rule::new(-242236800, Abbreviation::CDT, -18000, true),
    Rule::new(-226515600, Abbreviation::CST, -21600, false),
    Rule::new(-210787200, Abbreviation::CDT, -18000, true),
    Rule::new(-195066000, Abbreviation::CST, -21600, false),
    Rule::new(-179337600, Abbreviation::CDT, -18000, true),
    Rule::new(-163616400, Abbreviation::CST, -21600, false),
    Rule::new(-147888000, Abbreviation::CDT, -18000, true),
    Rule::new(-131562000, Abbreviation::CST, -21600, false),
    Rule::new(-116438400, Abbreviation::CDT, -18000, true),
    Rule::new(-100112400, Abbreviation::CST, -21600, false),
    Rule::new(-84384000, Abbreviation::CDT, -18000, true),
    Rule::new(-68662800, Abbreviation::CST, -21600, false),
    Rule::new(-52934400, Abbreviation::CDT, -18000, true),
    Rule::new(-37213200, Abbreviation::CST, -21600, false),
    Rule::new(-21484800, Abbreviation::CDT, -18000, true),
    Rule::new(-5763600, Abbreviation::CST, -21600, false),
    Rule::new(9964800, Abbreviation::CDT, -18000, true),
    Rule::new(25686000, Abbreviation::CST, -21600, false),
    Rule::new(41414400, Abbreviation::CDT, -18000, true),
    Rule::new(57740400, Abbreviation::CST, -21600, false),
    Rule::new(73468800, Abbreviation::CDT, -18000, true),
    Rule::new(89190000, Abbreviation::CST, -21600, false),
    Rule::new(104918400, Abbreviation::CDT, -18000, true),
    Rule::new(120639600, Abbreviation::CST, -21600, false),
    Rule::new(126691200, Abbreviation::CDT, -18000, true),
    Rule::new(152089200, Abbreviation::CST, -21600, false),
    Rule::new(162374400, Abbreviation::CDT, -18000, true),
    Rule::new(183538800, Abbreviation::CST, -21600, false),
    Rule::new(199267200, Abbreviation::CDT, -18000, true),
    Rule::new(215593200, Abbreviation::CST, -21600, false),
    Rule::new(230716800, Abbreviation::CDT, -18000, true),
    Rule::new(247042800, Abbreviation::CST, -21600, false),
    Rule::new(262771200, Abbreviation::CDT, -18000, true),
    Rule::new(278492400, Abbreviation::CST, -21600, false),
    Rule::new(294220800, Abbreviation::CDT, -18000, true),
    Rule::new(309942000, Abbreviation::CST, -21600, false),
    Rule::new(325670400, Abbreviation::CDT, -18000, true),
    Rule::new(341391600, Abbreviation::CST, -21600, false),
    Rule::new(357120000, Abbreviation::CDT, -18000, true),
    Rule::new(372841200, Abbreviation::CST, -21600, false),
    Rule::new(388569600, Abbreviation::CDT, -18000, true),
    Rule::new(404895600, Abbreviation::CST, -21600, false),
    Rule::new(420019200, Abbreviation::CDT, -18000, true),
    Rule::new(436345200, Abbreviation::CST, -21600, false),
    Rule::new(452073600, Abbreviation::CDT, -18000, true),
    Rule::new(467794800, Abbreviation::CST, -21600, false),
    Rule::new(483523200, Abbreviation::CDT, -18000, true),
    Rule::new(499244400, Abbreviation::CST, -21600, false),
    Rule::new(514972800, Abbreviation::CDT, -18000, true),
    Rule::new(530694000, Abbreviation::CST, -21600, false),
    Rule::new(544608000, Abbreviation::CDT, -18000, true),
    Rule::new(562143600, Abbreviation::CST, -21600, false),
    Rule::new(576057600, Abbreviation::CDT, -18000, true),
    Rule::new(594198000, Abbreviation::CST, -21600, false),
    Rule::new(607507200, Abbreviation::CDT, -18000, true),
    Rule::new(625647600, Abbreviation::CST, -21600, false),
    Rule::new(638956800, Abbreviation::CDT, -18000, true),
    Rule::new(657097200, Abbreviation::CST, -21600, false),
    Rule::new(671011200, Abbreviation::CDT, -18000, true),
    Rule::new(688546800, Abbreviation::CST, -21600, false),
    Rule::new(702460800, Abbreviation::CDT, -18000, true),
    Rule::new(719996400, Abbreviation::CST, -21600, false),
    Rule::new(733910400, Abbreviation::CDT, -18000, true),
    Rule::new(752050800, Abbreviation::CST, -21600, false),
    Rule::new(765360000, Abbreviation::CDT, -18000, true),
    Rule::new(783500400, Abbreviation::CST, -21600, false),
    Rule::new(796809600, Abbreviation::CDT, -18000, true),
    Rule::new(814950000, Abbreviation::CST, -21600, false),
    Rule::new(828864000, Abbreviation::CDT, -18000, true),
    Rule::new(846399600, Abbreviation::CST, -21600, false),
    Rule::new(860313600, Abbreviation::CDT, -18000, true),
    Rule::new(877849200, Abbreviation::CST, -21600, false),
    Rule::new(891763200, Abbreviation::CDT, -18000, true),
    Rule::new(909298800, Abbreviation::CST, -21600, false),
    Rule::new(923212800, Abbreviation::CDT, -18000, true),
    Rule::new(941353200, Abbreviation::CST, -21600, false),
    Rule::new(954662400, Abbreviation::CDT, -18000, true),
    Rule::new(972802800, Abbreviation::CST, -21600, false),
    Rule::new(986112000, Abbreviation::CDT, -18000, true),
    Rule::new(1004252400, Abbreviation::CST, -21600, false),
    Rule::new(1018166400, Abbreviation::CDT, -18000, true),
    Rule::new(1035702000, Abbreviation::CST, -21600, false),
    Rule::new(1049616000, Abbreviation::CDT, -18000, true),
    Rule::new(1067151600, Abbreviation::CST, -21600, false),
    Rule::new(1081065600, Abbreviation::CDT, -18000, true),
    Rule::new(1099206000, Abbreviation::CST, -21600, false),
    Rule::new(1112515200, Abbreviation::CDT, -18000, true),
    Rule::new(1130655600, Abbreviation::CST, -21600, false),
    Rule::new(1143964800, Abbreviation::CDT, -18000, true),
    Rule::new(1162105200, Abbreviation::CST, -21600, false),
    Rule::new(1173600000, Abbreviation::CDT, -18000, true),
    Rule::new(1194159600, Abbreviation::CST, -21600, false),
    Rule::new(1205049600, Abbreviation::CDT, -18000, true),
    Rule::new(1225609200, Abbreviation::CST, -21600, false),
    Rule::new(1236499200, Abbreviation::CDT, -18000, true),
    Rule::new(1257058800, Abbreviation::CST, -21600, false),
    Rule::new(1268553600, Abbreviation::CDT, -18000, true),
    Rule::new(1289113200, Abbreviation::CST, -21600, false),
    Rule::new(1300003200, Abbreviation::CDT, -18000, true),
    Rule::new(1320562800, Abbreviation::CST, -21600, false),
    Rule::new(1331452800, Abbreviation::CDT, -18000, true),
    Rule::new(1352012400, Abbreviation::CST, -21600, false),
    Rule::new(1362902400, Abbreviation::CDT, -18000, true),
    Rule::new(1383462000, Abbreviation::CST, -21600, false),
    Rule::new(1394352000, Abbreviation::CDT, -18000, true),
    Rule::new(1414911600, Abbreviation::CST, -21600, false),
    Rule::new(1425801600, Abbreviation::CDT, -18000, true),
    Rule::new(1446361200, Abbreviation::CST, -21600, false),
    Rule::new(1457856000, Abbreviation::CDT, -18000, true),
    Rule::new(1478415600, Abbreviation::CST, -21600, false),
    Rule::new(1489305600, Abbreviation::CDT, -18000, true),
    Rule::new(1509865200, Abbreviation::CST, -21600, false),
    Rule::new(1520755200, Abbreviation::CDT, -18000, true),
    Rule::new(1541314800, Abbreviation::CST, -21600, false),
    Rule::new(1552204800, Abbreviation::CDT, -18000, true),
    Rule::new(1572764400, Abbreviation::CST, -21600, false),
    Rule::new(1583654400, Abbreviation::CDT, -18000, true),
    Rule::new(1604214000, Abbreviation::CST, -21600, false),
    Rule::new(1615708800, Abbreviation::CDT, -18000, true),
    Rule::new(1636268400, Abbreviation::CST, -21600, false),
    Rule::new(1647158400, Abbreviation::CDT, -18000, true),
    Rule::new(1667718000, Abbreviation::CST, -21600, false),
    Rule::new(1678608000, Abbreviation::CDT, -18000, true),
    Rule::new(1699167600, Abbreviation::CST, -21600, false),
    Rule::new(1710057600, Abbreviation::CDT, -18000, true),
    Rule::new(1730617200, Abbreviation::CST, -21600, false),
    Rule::new(1741507200, Abbreviation::CDT, -18000, true),
    Rule::new(1762066800, Abbreviation::CST, -21600, false),
    Rule::new(1772956800, Abbreviation::CDT, -18000, true),
    Rule::new(1793516400, Abbreviation::CST, -21600, false),
    Rule::new(1805011200, Abbreviation::CDT, -18000, true),
    Rule::new(1825570800, Abbreviation::CST, -21600, false),
    Rule::new(1836460800, Abbreviation::CDT, -18000, true),
    Rule::new(1857020400, Abbreviation::CST, -21600, false),
    Rule::new(1867910400, Abbreviation::CDT, -18000, true),
    Rule::new(1888470000, Abbreviation::CST, -21600, false),
    Rule::new(1899360000, Abbreviation::CDT, -18000, true),
    Rule::new(1919919600, Abbreviation::CST, -21600, false),
    Rule::new(1930809600, Abbreviation::CDT, -18000, true),
    Rule::new(1951369200, Abbreviation::CST, -21600, false),
    Rule::new(1962864000, Abbreviation::CDT, -18000, true),
    Rule::new(1983423600, Abbreviation::CST, -21600, false),
    Rule::new(1994313600, Abbreviation::CDT, -18000, true),
    Rule::new(2014873200, Abbreviation::CST, -21600, false),
    Rule::new(2025763200, Abbreviation::CDT, -18000, true),
    Rule::new(2046322800, Abbreviation::CST, -21600, false),
    Rule::new(2057212800, Abbreviation::CDT, -18000, true),
    Rule::new(2077772400, Abbreviation::CST, -21600, false),
    Rule::new(2088662400, Abbreviation::CDT, -18000, true),
    Rule::new(2109222000, Abbreviation::CST, -21600, false),
    Rule::new(2120112000, Abbreviation::CDT, -18000, true),
    Rule::new(2140671600, Abbreviation::CST, -21600, false),
];

static RULES_AMERICA_DENVER: [Rule; 159] = [
    Rule::new(-34359738367, Abbreviation::LMT, -25196, false),
    Rule::new(-2717643600, Abbreviation::MST, -25200, false),
    Rule::new(-1633273200, Abbreviation::MDT, -21600, true),
    Rule::new(-1615132800, Abbreviation::MST, -25200, false),
    Rule::new(-1601823600, Abbreviation::MDT, -21600, true),
    Rule::new(-1583683200, Abbreviation::MST, -25200, false),
    Rule::new(-1570374000, Abbreviation::MDT, -21600, true),
    Rule::new(-1551628800, Abbreviation::MST, -25200, false),
    Rule::new(-1538924400, Abbreviation::MDT, -21600, true),
    Rule::new(-1534089600, Abbreviation::MST, -25200, false),
    Rule::new(-880210800, Abbreviation::MWT, -21600, true),
    Rule::new(-769395600, Abbreviation::MPT, -21600, true),
    Rule::new(-765388800, Abbreviation::MST, -25200, false),
    Rule::new(-147884400, Abbreviation::MDT, -21600, true),
    Rule::new(-131558400, Abbreviation::MST, -25200, false),
    Rule::new(-116434800, Abbreviation::MDT, -21600, true),
    Rule::new(-100108800, Abbreviation::MST, -25200, false),
    Rule::new(-84380400, Abbreviation::MDT, -21600, true),
    Rule::new(-68659200, Abbreviation::MST, -25200, false),
    Rule::new(-52930800, Abbreviation::MDT, -21600, true),
    Rule::new(-37209600, Abbreviation::MST, -25200, false),
    Rule::new(-21481200, Abbreviation::MDT, -21600, true),
    Rule::new(-5760000, Abbreviation::MST, -25200, false),
    Rule::new(9968400, Abbreviation::MDT, -21600, true),
    Rule::new(25689600, Abbreviation::MST, -25200, false),
    Rule::new(41418000, Abbreviation::MDT, -21600, true),
    Rule::new(57744000, Abbreviation::MST, -25200, false),
    Rule::new(73472400, Abbreviation::MDT, -21600, true),
    Rule::new(89193600, Abbreviation::MST, -25200, false),
    Rule::new(104922000, Abbreviation::MDT, -21600, true),
    Rule::new(120643200, Abbreviation::MST, -25200, false),
    Rule::new(126694800, Abbreviation::MDT, -21600, true),
    Rule::new(152092800, Abbreviation::MST, -25200, false),
    Rule::new(162378000, Abbreviation::MDT, -21600, true),
    Rule::new(183542400, Abbreviation::MST, -25200, false),
    Rule::new(199270800, Abbreviation::MDT, -21600, true),
    Rule::new(215596800, Abbreviation::MST, -25200, false),
    Rule::new(230720400, Abbreviation::MDT, -21600, true),
    Rule::new(247046400, Abbreviation::MST, -25200, false),
    Rule::new(262774800, Abbreviation::MDT, -21600, true),
    Rule::new(278496000, Abbreviation::MST, -25200, false),
    Rule::new(294224400, Abbreviation::MDT, -21600, true),
    Rule::new(309945600, Abbreviation::MST, -25200, false),
    Rule::new(325674000, Abbreviation::MDT, -21600, true),
    Rule::new(341395200, Abbreviation::MST, -25200, false),
    Rule::new(357123600, Abbreviation::MDT, -21600, true),
    Rule::new(372844800, Abbreviation::MST, -25200, false),
    Rule::new(388573200, Abbreviation::MDT, -21600, true),
    Rule::new(404899200, Abbreviation::MST, -25200, false),
    Rule::new(420022800, Abbreviation::MDT, -21600, true),
    Rule::new(436348800, Abbreviation::MST, -25200, false),
    Rule::new(452077200, Abbreviation::MDT, -21600, true),
    Rule::new(467798400, Abbreviation::MST, -25200, false),
    Rule::new(483526800, Abbreviation::MDT, -21600, true),
    Rule::new(499248000, Abbreviation::MST, -25200, false),
    Rule::new(514976400, Abbreviation::MDT, -21600, true),
    Rule::new(530697600, Abbreviation::MST, -25200, false),
    Rule::new(544611600, Abbreviation::MDT, -21600, true),
    Rule::new(562147200, Abbreviation::MST, -25200, false),
    Rule::new(576061200, Abbreviation::MDT, -21600, true),
    Rule::new(594201600, Abbreviation::MST, -25200, false),
    Rule::new(607510800, Abbreviation::MDT, -21600, true),
    Rule::new(625651200, Abbreviation::MST, -25200, false),
    Rule::new(638960400, Abbreviation::MDT, -21600, true),
    Rule::new(657100800, Abbreviation::MST, -25200, false),
    Rule::new(671014800, Abbreviation::MDT, -21600, true),
    Rule::new(688550400, Abbreviation::MST, -25200, false),
    Rule::new(702464400, Abbreviation::MDT, -21600, true),
    Rule::new(720000000, Abbreviation::MST, -25200, false),
    Rule::new(733914000, Abbreviation::MDT, -21600, true),
    Rule::new(752054400, Abbreviation::MST, -25200, false),
    Rule::new(765363600, Abbreviation::MDT, -21600, true),
    Rule::new(783504000, Abbreviation::MST, -25200, false),
    Rule::new(796813200, Abbreviation::MDT, -21600, true),
    Rule::new(814953600, Abbreviation::MST, -25200, false),
    Rule::new(828867600, Abbreviation::MDT, -21600, true),
    Rule::new(846403200, Abbreviation::MST, -25200, false),
    Rule::new(860317200, Abbreviation::MDT, -21600, true),
    Rule::new(877852800, Abbreviation::MST, -25200, false),
    Rule::new(891766800, Abbreviation::MDT, -21600, true),
    Rule::new(909302400, Abbreviation::MST, -25200, false),
    Rule::new(923216400, Abbreviation::MDT, -21600, true),
    Rule::new(941356800, Abbreviation::MST, -25200, false),
    Rule::new(954666000, Abbreviation::MDT, -21600, true),
    Rule::new(972806400, Abbreviation::MST, -25200, false),
    Rule::new(986115600, Abbreviation::MDT, -21600, true),
    Rule::new(1004256000, Abbreviation::MST, -25200, false),
    Rule::new(1018170000, Abbreviation::MDT, -21600, true),
    Rule::new(1035705600, Abbreviation::MST, -25200, false),
    Rule::new(1049619600, Abbreviation::MDT, -21600, true),
    Rule::new(1067155200, Abbreviation::MST, -25200, false),
    Rule::new(1081069200, Abbreviation::MDT, -21600, true),
    Rule::new(1099209600, Abbreviation::MST, -25200, false),
    Rule::new(1112518800, Abbreviation::MDT, -21600, true),
    Rule::new(1130659200, Abbreviation::MST, -25200, false),
    Rule::new(1143968400, Abbreviation::MDT, -21600, true),
    Rule::new(1162108800, Abbreviation::MST, -25200, false),
    Rule::new(1173603600, Abbreviation::MDT, -21600, true),
    Rule::new(1194163200, Abbreviation::MST, -25200, false),
    Rule::new(1205053200, Abbreviation::MDT, -21600, true),
    Rule::new(1225612800, Abbreviation::MST, -25200, false),
    Rule::new(1236502800, Abbreviation::MDT, -21600, true),
    Rule::new(1257062400, Abbreviation::MST, -25200, false),
    Rule::new(1268557200, Abbreviation::MDT, -21600, true),
    Rule::new(1289116800, Abbreviation::MST, -25200, false),
    Rule::new(1300006800, Abbreviation::MDT, -21600, true),
    Rule::new(1320566400, Abbreviation::MST, -25200, false),
    Rule::new(1331456400, Abbreviation::MDT, -21600, true),
    Rule::new(1352016000, Abbreviation::MST, -25200, false),
    Rule::new(1362906000, Abbreviation::MDT, -21600, true),
    Rule::new(1383465600, Abbreviation::MST, -25200, false),
    Rule::new(1394355600, Abbreviation::MDT, -21600, true),
    Rule::new(1414915200, Abbreviation::MST, -25200, false),
    Rule::new(1425805200, Abbreviation::MDT, -21600, true),
    Rule::new(1446364800, Abbreviation::MST, -25200, false),
    Rule::new(1457859600, Abbreviation::MDT, -21600, true),
    Rule::new(1478419200, Abbreviation::MST, -25200, false),
    Rule::new(1489309200, Abbreviation::MDT, -21600, true),
    Rule::new(1509868800, Abbreviation::MST, -25200, false),
    Rule::new(1520758800, Abbreviation::MDT, -21600, true),
    Rule::new(1541318400, Abbreviation::MST, -25200, false),
    Rule::new(1552208400, Abbreviation::MDT, -21600, true),
    Rule::new(1572768000, Abbreviation::MST, -25200, false),
    Rule::new(1583658000, Abbreviation::MDT, -21600, true),
    Rule::new(1604217600, Abbreviation::MST, -25200, false),
    Rule::new(1615712400, Abbreviation::MDT, -21600, true),
    Rule::new(1636272000, Abbreviation::MST, -25200, false),
    Rule::new(1647162000, Abbreviation::MDT, -21600, true),
    Rule::new(1667721600, Abbreviation::MST, -25200, false),
    Rule::new(1678611600, Abbreviation::MDT, -21600, true),
    Rule::new(1699171200, Abbreviation::MST, -25200, false),
    Rule::new(1710061200, Abbreviation::MDT, -21600, true),
    Rule::new(1730620800, Abbreviation::MST, -25200, false),
    Rule::new(1741510800, Abbreviation::MDT, -21600, true),
    Rule::new(1762070400, Abbreviation::MST, -25200, false),
    Rule::new(1772960400, Abbreviation::MDT, -21600, true),
    Rule::new(1793520000, Abbreviation::MST, -25200, false),
    Rule::new(1805014800, Abbreviation::MDT, -21600, true),
    Rule::new(1825574400, Abbreviation::MST, -25200, false),
    Rule::new(1836464400, Abbreviation::MDT, -21600, true),
    Rule::new(1857024000, Abbreviation::MST, -25200, false),
    Rule::new(1867914000, Abbreviation::MDT, -21600, true),
    Rule::new(1888473600, Abbreviation::MST, -25200, false),
    Rule::new(1899363600, Abbreviation::MDT, -21600, true),
    Rule::new(1919923200, Abbreviation::MST, -25200, false),
    Rule::new(1930813200, Abbreviation::MDT, -21600, true),
    Rule::new(1951372800, Abbreviation::MST, -25200, false),
    Rule::new(1962867600, Abbreviation::MDT, -21600, true),
    Rule::new(1983427200, Abbreviation::MST, -25200, false),
    Rule::new(1994317200, Abbreviation::MDT, -21600, true),
    Rule::new(2014876800, Abbreviation::MST, -25200, false),
    Rule::new(2025766800, Abbreviation::MDT, -21600, true),
    Rule::new(2046326400, Abbreviation::MST, -25200, false),
    Rule::new(2057216400, Abbreviation::MDT, -21600, true),
    Rule::new(2077776000, Abbreviation::MST, -25200, false),
    Rule::new(2088666000, Abbreviation::MDT, -21600, true),
    Rule::new(2109225600, Abbreviation::MST, -25200, false),
    Rule::new(2120115600, Abbreviation::MDT, -21600, true),
    Rule::new(2140675200, Abbreviation::MST, -25200, false),
];

static RULES_AMERICA_LOS_ANGELES: [Rule; 187] = [
    Rule::new(-34359738367, Abbreviation::LMT, -28378, false),
    Rule::new(-2717640000, Abbreviation::PST, -28800, false),
    Rule::new(-1633269600, Abbreviation::PDT, -25200, true),
    Rule::new(-1615129200, Abbreviation::PST, -28800, false),
    Rule::new(-1601820000, Abbreviation::PDT, -25200, true),
    Rule::new(-1583679600, Abbreviation::PST, -28800, false),
    Rule::new(-880207200, Abbreviation::PWT, -25200, true),
    Rule::new(-769395600, Abbreviation::PPT, -25200, true),
    Rule::new(-765385200, Abbreviation::PST, -28800, false),
    Rule::new(-687967140, Abbreviation::PDT, -25200, true),
    Rule::new(-662655600, Abbreviation::PST, -28800, false),
    Rule::new(-620838000, Abbreviation::PDT, -25200, true),
    Rule::new(-608137200, Abbreviation::PST, -28800, false),
    Rule::new(-589388400, Abbreviation::PDT, -25200, true),
    Rule::new(-576082800, Abbreviation::PST, -28800, false),
    Rule::new(-557938800, Abbreviation::PDT, -25200, true),
    Rule::new(-544633200, Abbreviation::PST, -28800, false),
    Rule::new(-526489200, Abbreviation::PDT, -25200, true),
    Rule::new(-513183600, Abbreviation::PST, -28800, false),
    Rule::new(-495039600, Abbreviation::PDT, -25200, true),
    Rule::new(-481734000, Abbreviation::PST, -28800, false),
    Rule::new(-463590000, Abbreviation::PDT, -25200, true),
    Rule::new(-450284400, Abbreviation::PST, -28800, false),
    Rule::new(-431535600, Abbreviation::PDT, -25200, true),
    Rule::new(-418230000, Abbreviation::PST, -28800, false),
    Rule::new(-400086000, Abbreviation::PDT, -25200, true),
    Rule::new(-386780400, Abbreviation::PST, -28800, false),
    Rule::new(-368636400, Abbreviation::PDT, -25200, true),
    Rule::new(-355330800, Abbreviation::PST, -28800, false),
    Rule::new(-337186800, Abbreviation::PDT, -25200, true),
    Rule::new(-323881200, Abbreviation::PST, -28800, false),
    Rule::new(-305737200, Abbreviation::PDT, -25200, true),
    Rule::new(-292431600, Abbreviation::PST, -28800, false),
    Rule::new(-273682800, Abbreviation::PDT, -25200, true),
    Rule::new(-260982000, Abbreviation::PST, -28800, false),
    Rule::new(-242233200, Abbreviation::PDT, -25200, true),
    Rule::new(-226508400, Abbreviation::PST, -28800, false),
    Rule::new(-210783600, Abbreviation::PDT, -25200, true),
    Rule::new(-195058800, Abbreviation::PST, -28800, false),
    Rule::new(-179334000, Abbreviation::PDT, -25200, true),
    Rule::new(-163609200, Abbreviation::PST, -28800, false),
    Rule::new(-147884400, Abbreviation::PDT, -25200, true),
    Rule::new(-131554800, Abbreviation::PST, -28800, false),
    Rule::new(-116434800, Abbreviation::PDT, -25200, true),
    Rule::new(-100105200, Abbreviation::PST, -28800, false),
    Rule::new(-84376800, Abbreviation::PDT, -25200, true),
    Rule::new(-68655600, Abbreviation::PST, -28800, false),
    Rule::new(-52927200, Abbreviation::PDT, -25200, true),
    Rule::new(-37206000, Abbreviation::PST, -28800, false),
    Rule::new(-21477600, Abbreviation::PDT, -25200, true),
    Rule::new(-5756400, Abbreviation::PST, -28800, false),
    Rule::new(9972000, Abbreviation::PDT, -25200, true),
    Rule::new(25693200, Abbreviation::PST, -28800, false),
    Rule::new(41421600, Abbreviation::PDT, -25200, true),
    Rule::new(57747600, Abbreviation::PST, -28800, false),
    Rule::new(73476000, Abbreviation::PDT, -25200, true),
    Rule::new(89197200, Abbreviation::PST, -28800, false),
    Rule::new(104925600, Abbreviation::PDT, -25200, true),
    Rule::new(120646800, Abbreviation::PST, -28800, false),
    Rule::new(126698400, Abbreviation::PDT, -25200, true),
    Rule::new(152096400, Abbreviation::PST, -28800, false),
    Rule::new(162381600, Abbreviation::PDT, -25200, true),
    Rule::new(183546000, Abbreviation::PST, -28800, false),
    Rule::new(199274400, Abbreviation::PDT, -25200, true),
    Rule::new(215600400, Abbreviation::PST, -28800, false),
    Rule::new(230724000, Abbreviation::PDT, -25200, true),
    Rule::new(247050000, Abbreviation::PST, -28800, false),
    Rule::new(262778400, Abbreviation::PDT, -25200, true),
    Rule::new(278499600, Abbreviation::PST, -28800, false),
    Rule::new(294228000, Abbreviation::PDT, -25200, true),
    Rule::new(309949200, Abbreviation::PST, -28800, false),
    Rule::new(325677600, Abbreviation::PDT, -25200, true),
    Rule::new(341398800, Abbreviation::PST, -28800, false),
    Rule::new(357127200, Abbreviation::PDT, -25200, true),
    Rule::new(372848400, Abbreviation::PST, -28800, false),
    Rule::new(388576800, Abbreviation::PDT, -25200, true),
    Rule::new(404902800, Abbreviation::PST, -28800, false),
    Rule::new(420026400, Abbreviation::PDT, -25200, true),
    Rule::new(436352400, Abbreviation::PST, -28800, false),
    Rule::new(452080800, Abbreviation::PDT, -25200, true),
    Rule::new(467802000, Abbreviation::PST, -28800, false),
    Rule::new(483530400, Abbreviation::PDT, -25200, true),
    Rule::new(499251600, Abbreviation::PST, -28800, false),
    Rule::new(514980000, Abbreviation::PDT, -25200, true),
    Rule::new(530701200, Abbreviation::PST, -28800, false),
    Rule::new(544615200, Abbreviation::PDT, -25200, true),
    Rule::new(562150800, Abbreviation::PST, -28800, false),
    Rule::new(576064800, Abbreviation::PDT, -25200, true),
    Rule::new(594205200, Abbreviation::PST, -28800, false),
    Rule::new(607514400, Abbreviation::PDT, -25200, true),
    Rule::new(625654800, Abbreviation::PST, -28800, false),
    Rule::new(638964000, Abbreviation::PDT, -25200, true),
    Rule::new(657104400, Abbreviation::PST, -28800, false),
    Rule::new(671018400, Abbreviation::PDT, -25200, true),
    Rule::new(688554000, Abbreviation::PST, -28800, false),
    Rule::new(702468000, Abbreviation::PDT, -25200, true),
    Rule::new(720003600, Abbreviation::PST, -28800, false),
    Rule::new(733917600, Abbreviation::PDT, -25200, true),
    Rule::new(752058000, Abbreviation::PST, -28800, false),
    Rule::new(765367200, Abbreviation::PDT, -25200, true),
    Rule::new(783507600, Abbreviation::PST, -28800, false),
    Rule::new(796816800, Abbreviation::PDT, -25200, true),
    Rule::new(814957200, Abbreviation::PST, -28800, false),
    Rule::new(828871200, Abbreviation::PDT, -25200, true),
    Rule::new(846406800, Abbreviation::PST, -28800, false),
    Rule::new(860320800, Abbreviation::PDT, -25200, true),
    Rule::new(877856400, Abbreviation::PST, -28800, false),
    Rule::new(891770400, Abbreviation::PDT, -25200, true),
    Rule::new(909306000, Abbreviation::PST, -28800, false),
    Rule::new(923220000, Abbreviation::PDT, -25200, true),
    Rule::new(941360400, Abbreviation::PST, -28800, false),
    Rule::new(954669600, Abbreviation::PDT, -25200, true),
    Rule::new(972810000, Abbreviation::PST, -28800, false),
    Rule::new(986119200, Abbreviation::PDT, -25200, true),
    Rule::new(1004259600, Abbreviation::PST, -28800, false),
    Rule::new(1018173600, Abbreviation::PDT, -25200, true),
    Rule::new(1035709200, Abbreviation::PST, -28800, false),
    Rule::new(1049623200, Abbreviation::PDT, -25200, true),
    Rule::new(1067158800, Abbreviation::PST, -28800, false),
    Rule::new(1081072800, Abbreviation::PDT, -25200, true),
    Rule::new(1099213200, Abbreviation::PST, -28800, false),
    Rule::new(1112522400, Abbreviation::PDT, -25200, true),
    Rule::new(1130662800, Abbreviation::PST, -28800, false),
    Rule::new(1143972000, Abbreviation::PDT, -25200, true),
    Rule::new(1162112400, Abbreviation::PST, -28800, false),
    Rule::new(1173607200, Abbreviation::PDT, -25200, true),
    Rule::new(1194166800, Abbreviation::PST, -28800, false),
    Rule::new(1205056800, Abbreviation::PDT, -25200, true),
    Rule::new(1225616400, Abbreviation::PST, -28800, false),
    Rule::new(1236506400, Abbreviation::PDT, -25200, true),
    Rule::new(1257066000, Abbreviation::PST, -28800, false),
    Rule::new(1268560800, Abbreviation::PDT, -25200, true),
    Rule::new(1289120400, Abbreviation::PST, -28800, false),
    Rule::new(1300010400, Abbreviation::PDT, -25200, true),
    Rule::new(1320570000, Abbreviation::PST, -28800, false),
    Rule::new(1331460000, Abbreviation::PDT, -25200, true),
    Rule::new(1352019600, Abbreviation::PST, -28800, false),
    Rule::new(1362909600, Abbreviation::PDT, -25200, true),
    Rule::new(1383469200, Abbreviation::PST, -28800, false),
    Rule::new(1394359200, Abbreviation::PDT, -25200, true),
    Rule::new(1414918800, Abbreviation::PST, -28800, false),
    Rule::new(1425808800, Abbreviation::PDT, -25200, true),
    Rule::new(1446368400, Abbreviation::PST, -28800, false),
    Rule::new(1457863200, Abbreviation::PDT, -25200, true),
    Rule::new(1478422800, Abbreviation::PST, -28800, false),
    Rule::new(1489312800, Abbreviation::PDT, -25200, true),
    Rule::new(1509872400, Abbreviation::PST, -28800, false),
    Rule::new(1520762400, Abbreviation::PDT, -25200, true),
    Rule::new(1541322000, Abbreviation::PST, -28800, false),
    Rule::new(1552212000, Abbreviation::PDT, -25200, true),
    Rule::new(1572771600, Abbreviation::PST, -28800, false),
    Rule::new(1583661600, Abbreviation::PDT, -25200, true),
    Rule::new(1604221200, Abbreviation::PST, -28800, false),
    Rule::new(1615716000, Abbreviation::PDT, -25200, true),
    Rule::new(1636275600, Abbreviation::PST, -28800, false),
    Rule::new(1647165600, Abbreviation::PDT, -25200, true),
    Rule::new(1667725200, Abbreviation::PST, -28800, false),
    Rule::new(1678615200, Abbreviation::PDT, -25200, true),
    Rule::new(1699174800, Abbreviation::PST, -28800, false),
    Rule::new(1710064800, Abbreviation::PDT, -25200, true),
    Rule::new(1730624400, Abbreviation::PST, -28800, false),
    Rule::new(1741514400, Abbreviation::PDT, -25200, true),
    Rule::new(1762074000, Abbreviation::PST, -28800, false),
    Rule::new(1772964000, Abbreviation::PDT, -25200, true),
    Rule::new(1793523600, Abbreviation::PST, -28800, false),
    Rule::new(1805018400, Abbreviation::PDT, -25200, true),
    Rule::new(1825578000, Abbreviation::PST, -28800, false),
    Rule::new(1836468000, Abbreviation::PDT, -25200, true),
    Rule::new(1857027600, Abbreviation::PST, -28800, false),
    Rule::new(1867917600, Abbreviation::PDT, -25200, true),
    Rule::new(1888477200, Abbreviation::PST, -28800, false),
    Rule::new(1899367200, Abbreviation::PDT, -25200, true),
    Rule::new(1919926800, Abbreviation::PST, -28800, false),
    Rule::new(1930816800, Abbreviation::PDT, -25200, true),
    Rule::new(1951376400, Abbreviation::PST, -28800, false),
    Rule::new(1962871200, Abbreviation::PDT, -25200, true),
    Rule::new(1983430800, Abbreviation::PST, -28800, false),
    Rule::new(1994320800, Abbreviation::PDT, -25200, true),
    Rule::new(2014880400, Abbreviation::PST, -28800, false),
    Rule::new(2025770400, Abbreviation::PDT, -25200, true),
    Rule::new(2046330000, Abbreviation::PST, -28800, false),
    Rule::new(2057220000, Abbreviation::PDT, -25200, true),
    Rule::new(2077779600, Abbreviation::PST, -28800, false),
    Rule::new(2088669600, Abbreviation::PDT, -25200, true),
    Rule::new(2109229200, Abbreviation::PST, -28800, false),
    Rule::new(2120119200, Abbreviation::PDT, -25200, true),
    Rule::new(2140678800, Abbreviation::PST, -28800, false),
];

static RULES_AMERICA_NEW_YORK: [Rule; 237] = [
    Rule::new(-34359738367, Abbreviation::LMT, -17762, false),
    Rule::new(-2717650800, Abbreviation::EST, -18000, false),
    Rule::new(-1633280400, Abbreviation::EDT, -14400, true),
    Rule::new(-1615140000, Abbreviation::EST, -18000, false),
    Rule::new(-1601830800, Abbreviation::EDT, -14400, true),
    Rule::new(-1583690400, Abbreviation::EST, -18000, false),
    Rule::new(-1570381200, Abbreviation::EDT, -14400, true),
    Rule::new(-1551636000, Abbreviation::EST, -18000, false),
    Rule::new(-1536512400, Abbreviation::EDT, -14400, true),
    Rule::new(-1523210400, Abbreviation::EST, -18000, false),
    Rule::new(-1504458000, Abbreviation::EDT, -14400, true),
    Rule::new(-1491760800, Abbreviation::EST, -18000, false),
    Rule::new(-1473008400, Abbreviation::EDT, -14400, true),
    Rule::new(-1459706400, Abbreviation::EST, -18000, false),
    Rule::new(-1441558800, Abbreviation::EDT, -14400, true),
    Rule::new(-1428256800, Abbreviation::EST, -18000, false),
    Rule::new(-1410109200, Abbreviation::EDT, -14400, true),
    Rule::new(-1396807200, Abbreviation::EST, -18000, false),
    Rule::new(-1378659600, Abbreviation::EDT, -14400, true),
    Rule::new(-1365357600, Abbreviation::EST, -18000, false),
    Rule::new(-1347210000, Abbreviation::EDT, -14400, true),
    Rule::new(-1333908000, Abbreviation::EST, -18000, false),
    Rule::new(-1315155600, Abbreviation::EDT, -14400, true),
    Rule::new(-1301853600, Abbreviation::EST, -18000, false),
    Rule::new(-1283706000, Abbreviation::EDT, -14400, true),
    Rule::new(-1270404000, Abbreviation::EST, -18000, false),
    Rule::new(-1252256400, Abbreviation::EDT, -14400, true),
    Rule::new(-1238954400, Abbreviation::EST, -18000, false),
    Rule::new(-1220806800, Abbreviation::EDT, -14400, true),
    Rule::new(-1207504800, Abbreviation::EST, -18000, false),
    Rule::new(-1189357200, Abbreviation::EDT, -14400, true),
    Rule::new(-1176055200, Abbreviation::EST, -18000, false),
    Rule::new(-1157302800, Abbreviation::EDT, -14400, true),
    Rule::new(-1144605600, Abbreviation::EST, -18000, false),
    Rule::new(-1125853200, Abbreviation::EDT, -14400, true),
    Rule::new(-1112551200, Abbreviation::EST, -18000, false),
    Rule::new(-1094403600, Abbreviation::EDT, -14400, true),
    Rule::new(-1081101600, Abbreviation::EST, -18000, false),
    Rule::new(-1062954000, Abbreviation::EDT, -14400, true),
    Rule::new(-1049652000, Abbreviation::EST, -18000, false),
    Rule::new(-1031504400, Abbreviation::EDT, -14400, true),
    Rule::new(-1018202400, Abbreviation::EST, -18000, false),
    Rule::new(-1000054800, Abbreviation::EDT, -14400, true),
    Rule::new(-986752800, Abbreviation::EST, -18000, false),
    Rule::new(-968000400, Abbreviation::EDT, -14400, true),
    Rule::new(-955303200, Abbreviation::EST, -18000, false),
    Rule::new(-936550800, Abbreviation::EDT, -14400, true),
    Rule::new(-923248800, Abbreviation::EST, -18000, false),
    Rule::new(-905101200, Abbreviation::EDT, -14400, true),
    Rule::new(-891799200, Abbreviation::EST, -18000, false),
    Rule::new(-880218000, Abbreviation::EWT, -14400, true),
    Rule::new(-769395600, Abbreviation::EPT, -14400, true),
    Rule::new(-765396000, Abbreviation::EST, -18000, false),
    Rule::new(-747248400, Abbreviation::EDT, -14400, true),
    Rule::new(-733946400, Abbreviation::EST, -18000, false),
    Rule::new(-715798800, Abbreviation::EDT, -14400, true),
    Rule::new(-702496800, Abbreviation::EST, -18000, false),
    Rule::new(-684349200, Abbreviation::EDT, -14400, true),
    Rule::new(-671047200, Abbreviation::EST, -18000, false),
    Rule::new(-652899600, Abbreviation::EDT, -14400, true),
    Rule::new(-639597600, Abbreviation::EST, -18000, false),
    Rule::new(-620845200, Abbreviation::EDT, -14400, true),
    Rule::new(-608148000, Abbreviation::EST, -18000, false),
    Rule::new(-589395600, Abbreviation::EDT, -14400, true),
    Rule::new(-576093600, Abbreviation::EST, -18000, false),
    Rule::new(-557946000, Abbreviation::EDT, -14400, true),
    Rule::new(-544644000, Abbreviation::EST, -18000, false),
    Rule::new(-526496400, Abbreviation::EDT, -14400, true),
    Rule::new(-513194400, Abbreviation::EST, -18000, false),
    Rule::new(-495046800, Abbreviation::EDT, -14400, true),
    Rule::new(-481744800, Abbreviation::EST, -18000, false),
    Rule::new(-463597200, Abbreviation::EDT, -14400, true),
    Rule::new(-447271200, Abbreviation::EST, -18000, false),
    Rule::new(-431542800, Abbreviation::EDT, -14400, true),
    Rule::new(-415821600, Abbreviation::EST, -18000, false),
    Rule::new(-400093200, Abbreviation::EDT, -14400, true),
    Rule::new(-384372000, Abbreviation::EST, -18000, false),
    Rule::new(-368643600, Abbreviation::EDT, -14400, true),
    Rule::new(-352922400, Abbreviation::EST, -18000, false),
    Rule::new(-337194000, Abbreviation::EDT, -14400, true),
    Rule::new(-321472800, Abbreviation::EST, -18000, false),
    Rule::new(-305744400, Abbreviation::EDT, -14400, true),
    Rule::new(-289418400, Abbreviation::EST, -18000, false),
    Rule::new(-273690000, Abbreviation::EDT, -14400, true),
    Rule::new(-257968800, Abbreviation::EST, -18000, false),
    Rule::new(-242240400, Abbreviation::EDT, -14400, true),
    Rule::new(-226519200, Abbreviation::EST, -18000, false),
    Rule::new(-210790800, Abbreviation::EDT, -14400, true),
    Rule::new(-195069600, Abbreviation::EST, -18000, false),
    Rule::new(-179341200, Abbreviation::EDT, -14400, true),
    Rule::new(-163620000, Abbreviation::EST, -18000, false),
    Rule::new(-147891600, Abbreviation::EDT, -14400, true),
    Rule::new(-131565600, Abbreviation::EST, -18000, false),
    Rule::new(-116442000, Abbreviation::EDT, -14400, true),
    Rule::new(-100116000, Abbreviation::EST, -18000, false),
    Rule::new(-84387600, Abbreviation::EDT, -14400, true),
    Rule::new(-68666400, Abbreviation::EST, -18000, false),
    Rule::new(-52938000, Abbreviation::EDT, -14400, true),
    Rule::new(-37216800, Abbreviation::EST, -18000, false),
    Rule::new(-21488400, Abbreviation::EDT, -14400, true),
    Rule::new(-5767200, Abbreviation::EST, -18000, false),
    Rule::new(9961200, Abbreviation::EDT, -14400, true),
    Rule::new(25682400, Abbreviation::EST, -18000, false),
    Rule::new(41410800, Abbreviation::EDT, -14400, true),
    Rule::new(57736800, Abbreviation::EST, -18000, false),
    Rule::new(73465200, Abbreviation::EDT, -14400, true),
    Rule::new(89186400, Abbreviation::EST, -18000, false),
    Rule::new(104914800, Abbreviation::EDT, -14400, true),
    Rule::new(120636000, Abbreviation::EST, -18000, false),
    Rule::new(126687600, Abbreviation::EDT, -14400, true),
    Rule::new(152085600, Abbreviation::EST, -18000, false),
    Rule::new(162370800, Abbreviation::EDT, -14400, true),
    Rule::new(183535200, Abbreviation::EST, -18000, false),
    Rule::new(199263600, Abbreviation::EDT, -14400, true),
    Rule::new(215589600, Abbreviation::EST, -18000, false),
    Rule::new(230713200, Abbreviation::EDT, -14400, true),
    Rule::new(247039200, Abbreviation::EST, -18000, false),
    Rule::new(262767600, Abbreviation::EDT, -14400, true),
    Rule::new(278488800, Abbreviation::EST, -18000, false),
    Rule::new(294217200, Abbreviation::EDT, -14400, true),
    Rule::new(309938400, Abbreviation::EST, -18000, false),
    Rule::new(325666800, Abbreviation::EDT, -14400, true),
    Rule::new(341388000, Abbreviation::EST, -18000, false),
    Rule::new(357116400, Abbreviation::EDT, -14400, true),
    Rule::new(372837600, Abbreviation::EST, -18000, false),
    Rule::new(388566000, Abbreviation::EDT, -14400, true),
    Rule::new(404892000, Abbreviation::EST, -18000, false),
    Rule::new(420015600, Abbreviation::EDT, -14400, true),
    Rule::new(436341600, Abbreviation::EST, -18000, false),
    Rule::new(452070000, Abbreviation::EDT, -14400, true),
    Rule::new(467791200, Abbreviation::EST, -18000, false),
    Rule::new(483519600, Abbreviation::EDT, -14400, true),
    Rule::new(499240800, Abbreviation::EST, -18000, false),
    Rule::new(514969200, Abbreviation::EDT, -14400, true),
    Rule::new(530690400, Abbreviation::EST, -18000, false),
    Rule::new(544604400, Abbreviation::EDT, -14400, true),
    Rule::new(562140000, Abbreviation::EST, -18000, false),
    Rule::new(576054000, Abbreviation::EDT, -14400, true),
    Rule::new(594194400, Abbreviation::EST, -18000, false),
    Rule::new(607503600, Abbreviation::EDT, -14400, true),
    Rule::new(625644000, Abbreviation::EST, -18000, false),
    Rule::new(638953200, Abbreviation::EDT, -14400, true),
    Rule::new(657093600, Abbreviation::EST, -18000, false),
    Rule::new(671007600, Abbreviation::EDT, -14400, true),
    Rule::new(688543200, Abbreviation::EST, -18000, false),
    Rule::new(702457200, Abbreviation::EDT, -14400, true),
    Rule::new(719992800, Abbreviation::EST, -18000, false),
    Rule::new(733906800, Abbreviation::EDT, -14400, true),
    Rule::new(752047200, Abbreviation::EST, -18000, false),
    Rule::new(765356400, Abbreviation::EDT, -14400, true),
    Rule::new(783496800, Abbreviation::EST, -18000, false),
    Rule::new(796806000, Abbreviation::EDT, -14400, true),
    Rule::new(814946400, Abbreviation::EST, -18000, false),
    Rule::new(828860400, Abbreviation::EDT, -14400, true),
    Rule::new(846396000, Abbreviation::EST, -18000, false),
    Rule::new(860310000, Abbreviation::EDT, -14400, true),
    Rule::new(877845600, Abbreviation::EST, -18000, false),
    Rule::new(891759600, Abbreviation::EDT, -14400, true),
    Rule::new(909295200, Abbreviation::EST, -18000, false),
    Rule::new(923209200, Abbreviation::EDT, -14400, true),
    Rule::new(941349600, Abbreviation::EST, -18000, false),
    Rule::new(954658800, Abbreviation::EDT, -14400, true),
    Rule::new(972799200, Abbreviation::EST, -18000, false),
    Rule::new(986108400, Abbreviation::EDT, -14400, true),
    Rule::new(1004248800, Abbreviation::EST, -18000, false),
    Rule::new(1018162800, Abbreviation::EDT, -14400, true),
    Rule::new(1035698400, Abbreviation::EST, -18000, false),
    Rule::new(1049612400, Abbreviation::EDT, -14400, true),
    Rule::new(1067148000, Abbreviation::EST, -18000, false),
    Rule::new(1081062000, Abbreviation::EDT, -14400, true),
    Rule::new(1099202400, Abbreviation::EST, -18000, false),
    Rule::new(1112511600, Abbreviation::EDT, -14400, true),
    Rule::new(1130652000, Abbreviation::EST, -18000, false),
    Rule::new(1143961200, Abbreviation::EDT, -14400, true),
    Rule::new(1162101600, Abbreviation::EST, -18000, false),
    Rule::new(1173596400, Abbreviation::EDT, -14400, true),
    Rule::new(1194156000, Abbreviation::EST, -18000, false),
    Rule::new(1205046000, Abbreviation::EDT, -14400, true),
    Rule::new(1225605600, Abbreviation::EST, -18000, false),
    Rule::new(1236495600, Abbreviation::EDT, -14400, true),
    Rule::new(1257055200, Abbreviation::EST, -18000, false),
    Rule::new(1268550000, Abbreviation::EDT, -14400, true),
    Rule::new(1289109600, Abbreviation::EST, -18000, false),
    Rule::new(1299999600, Abbreviation::EDT, -14400, true),
    Rule::new(1320559200, Abbreviation::EST, -18000, false),
    Rule::new(1331449200, Abbreviation::EDT, -14400, true),
    Rule::new(1352008800, Abbreviation::EST, -18000, false),
    Rule::new(1362898800, Abbreviation::EDT, -14400, true),
    Rule::new(1383458400, Abbreviation::EST, -18000, false),
    Rule::new(1394348400, Abbreviation::EDT, -14400, true),
    Rule::new(1414908000, Abbreviation::EST, -18000, false),
    Rule::new(1425798000, Abbreviation::EDT, -14400, true),
    Rule::new(1446357600, Abbreviation::EST, -18000, false),
    Rule::new(1457852400, Abbreviation::EDT, -14400, true),
    Rule::new(1478412000, Abbreviation::EST, -18000, false),
    Rule::new(1489302000, Abbreviation::EDT, -14400, true),
    Rule::new(1509861600, Abbreviation::EST, -18000, false),
    Rule::new(1520751600, Abbreviation::EDT, -14400, true),
    Rule::new(1541311200, Abbreviation::EST, -18000, false),
    Rule::new(1552201200, Abbreviation::EDT, -14400, true),
    Rule::new(1572760800, Abbreviation::EST, -18000, false),
    Rule::new(1583650800, Abbreviation::EDT, -14400, true),
    Rule::new(1604210400, Abbreviation::EST, -18000, false),
    Rule::new(1615705200, Abbreviation::EDT, -14400, true),
    Rule::new(1636264800, Abbreviation::EST, -18000, false),
    Rule::new(1647154800, Abbreviation::EDT, -14400, true),
    Rule::new(1667714400, Abbreviation::EST, -18000, false),
    Rule::new(1678604400, Abbreviation::EDT, -14400, true),
    Rule::new(1699164000, Abbreviation::EST, -18000, false),
    Rule::new(1710054000, Abbreviation::EDT, -14400, true),
    Rule::new(1730613600, Abbreviation::EST, -18000, false),
    Rule::new(1741503600, Abbreviation::EDT, -14400, true),
    Rule::new(1762063200, Abbreviation::EST, -18000, false),
    Rule::new(1772953200, Abbreviation::EDT, -14400, true),
    Rule::new(1793512800, Abbreviation::EST, -18000, false),
    Rule::new(1805007600, Abbreviation::EDT, -14400, true),
    Rule::new(1825567200, Abbreviation::EST, -18000, false),
    Rule::new(1836457200, Abbreviation::EDT, -14400, true),
    Rule::new(1857016800, Abbreviation::EST, -18000, false),
    Rule::new(1867906800, Abbreviation::EDT, -14400, true),
    Rule::new(1888466400, Abbreviation::EST, -18000, false),
    Rule::new(1899356400, Abbreviation::EDT, -14400, true),
    Rule::new(1919916000, Abbreviation::EST, -18000, false),
    Rule::new(1930806000, Abbreviation::EDT, -14400, true),
    Rule::new(1951365600, Abbreviation::EST, -18000, false),
    Rule::new(1962860400, Abbreviation::EDT, -14400, true),
    Rule::new(1983420000, Abbreviation::EST, -18000, false),
    Rule::new(1994310000, Abbreviation::EDT, -14400, true),
    Rule::new(2014869600, Abbreviation::EST, -18000, false),
    Rule::new(2025759600, Abbreviation::EDT, -14400, true),
    Rule::new(2046319200, Abbreviation::EST, -18000, false),
    Rule::new(2057209200, Abbreviation::EDT, -14400, true),
    Rule::new(2077768800, Abbreviation::EST, -18000, false),
    Rule::new(2088658800, Abbreviation::EDT, -14400, true),
    Rule::new(2109218400, Abbreviation::EST, -18000, false),
    Rule::new(2120108400, Abbreviation::EDT, -14400, true),
    Rule::new(2140668000, Abbreviation::EST, -18000, false),
];

static RULES_AMERICA_PHOENIX: [Rule; 12] = [
    Rule::new(-34359738367, Abbreviation::LMT, -26898, false),
    Rule::new(-2717643600, Abbreviation::MST, -25200, false),
    Rule::new(-1633273200, Abbreviation::MDT, -21600, true),
    Rule::new(-1615132800, Abbreviation::MST, -25200, false),
    Rule::new(-1601823600, Abbreviation::MDT, -21600, true),
    Rule::new(-1583683200, Abbreviation::MST, -25200, false),
    Rule::new(-880210800, Abbreviation::MWT, -21600, true),
    Rule::new(-820519140, Abbreviation::MST, -25200, false),
    Rule::new(-812653140, Abbreviation::MWT, -21600, true),
    Rule::new(-796845540, Abbreviation::MST, -25200, false),
    Rule::new(-84380400, Abbreviation::MDT, -21600, true),
    Rule::new(-68659200, Abbreviation::MST, -25200, false),
];

static RULES_AMERICA_SAO_PAULO: [Rule; 93] = [
    Rule::new(-34359738367, Abbreviation::LMT, -11188, false),
    Rule::new(-1767214412, Abbreviation::m03, -10800, false),
    Rule::new(-1206957600, Abbreviation::m02, -7200, true),
    Rule::new(-1191362400, Abbreviation::m03, -10800, false),
    Rule::new(-1175374800, Abbreviation::m02, -7200, true),
    Rule::new(-1159826400, Abbreviation::m03, -10800, false),
    Rule::new(-633819600, Abbreviation::m02, -7200, true),
    Rule::new(-622069200, Abbreviation::m03, -10800, false),
    Rule::new(-602283600, Abbreviation::m02, -7200, true),
    Rule::new(-591832800, Abbreviation::m03, -10800, false),
    Rule::new(-570747600, Abbreviation::m02, -7200, true),
    Rule::new(-560210400, Abbreviation::m03, -10800, false),
    Rule::new(-539125200, Abbreviation::m02, -7200, true),
    Rule::new(-531352800, Abbreviation::m03, -10800, false),
    Rule::new(-195426000, Abbreviation::m02, -7200, true),
    Rule::new(-184197600, Abbreviation::m03, -10800, false),
    Rule::new(-155163600, Abbreviation::m02, -7200, true),
    Rule::new(-150069600, Abbreviation::m03, -10800, false),
    Rule::new(-128898000, Abbreviation::m02, -7200, true),
    Rule::new(-121125600, Abbreviation::m03, -10800, false),
    Rule::new(-99954000, Abbreviation::m02, -7200, true),
    Rule::new(-89589600, Abbreviation::m03, -10800, false),
    Rule::new(-68418000, Abbreviation::m02, -7200, true),
    Rule::new(-57967200, Abbreviation::m03, -10800, false),
    Rule::new(499748400, Abbreviation::m02, -7200, true),
    Rule::new(511236000, Abbreviation::m03, -10800, false),
    Rule::new(530593200, Abbreviation::m02, -7200, true),
    Rule::new(540266400, Abbreviation::m03, -10800, false),
    Rule::new(562129200, Abbreviation::m02, -7200, true),
    Rule::new(571197600, Abbreviation::m03, -10800, false),
    Rule::new(592974000, Abbreviation::m02, -7200, true),
    Rule::new(602042400, Abbreviation::m03, -10800, false),
    Rule::new(624423600, Abbreviation::m02, -7200, true),
    Rule::new(634701600, Abbreviation::m03, -10800, false),
    Rule::new(656478000, Abbreviation::m02, -7200, true),
    Rule::new(666756000, Abbreviation::m03, -10800, false),
    Rule::new(687927600, Abbreviation::m02, -7200, true),
    Rule::new(697600800, Abbreviation::m03, -10800, false),
    Rule::new(719982000, Abbreviation::m02, -7200, true),
    Rule::new(728445600, Abbreviation::m03, -10800, false),
    Rule::new(750826800, Abbreviation::m02, -7200, true),
    Rule::new(761709600, Abbreviation::m03, -10800, false),
    Rule::new(782276400, Abbreviation::m02, -7200, true),
    Rule::new(793159200, Abbreviation::m03, -10800, false),
    Rule::new(813726000, Abbreviation::m02, -7200, true),
    Rule::new(824004000, Abbreviation::m03, -10800, false),
    Rule::new(844570800, Abbreviation::m02, -7200, true),
    Rule::new(856058400, Abbreviation::m03, -10800, false),
    Rule::new(876106800, Abbreviation::m02, -7200, true),
    Rule::new(888717600, Abbreviation::m03, -10800, false),
    Rule::new(908074800, Abbreviation::m02, -7200, true),
    Rule::new(919562400, Abbreviation::m03, -10800, false),
    Rule::new(938919600, Abbreviation::m02, -7200, true),
    Rule::new(951616800, Abbreviation::m03, -10800, false),
    Rule::new(970974000, Abbreviation::m02, -7200, true),
    Rule::new(982461600, Abbreviation::m03, -10800, false),
    Rule::new(1003028400, Abbreviation::m02, -7200, true),
    Rule::new(1013911200, Abbreviation::m03, -10800, false),
    Rule::new(1036292400, Abbreviation::m02, -7200, true),
    Rule::new(1045360800, Abbreviation::m03, -10800, false),
    Rule::new(1066532400, Abbreviation::m02, -7200, true),
    Rule::new(1076810400, Abbreviation::m03, -10800, false),
    Rule::new(1099364400, Abbreviation::m02, -7200, true),
    Rule::new(1108864800, Abbreviation::m03, -10800, false),
    Rule::new(1129431600, Abbreviation::m02, -7200, true),
    Rule::new(1140314400, Abbreviation::m03, -10800, false),
    Rule::new(1162695600, Abbreviation::m02, -7200, true),
    Rule::new(1172368800, Abbreviation::m03, -10800, false),
    Rule::new(1192330800, Abbreviation::m02, -7200, true),
    Rule::new(1203213600, Abbreviation::m03, -10800, false),
    Rule::new(1224385200, Abbreviation::m02, -7200, true),
    Rule::new(1234663200, Abbreviation::m03, -10800, false),
    Rule::new(1255834800, Abbreviation::m02, -7200, true),
    Rule::new(1266717600, Abbreviation::m03, -10800, false),
    Rule::new(1287284400, Abbreviation::m02, -7200, true),
    Rule::new(1298167200, Abbreviation::m03, -10800, false),
    Rule::new(1318734000, Abbreviation::m02, -7200, true),
    Rule::new(1330221600, Abbreviation::m03, -10800, false),
    Rule::new(1350788400, Abbreviation::m02, -7200, true),
    Rule::new(1361066400, Abbreviation::m03, -10800, false),
    Rule::new(1382238000, Abbreviation::m02, -7200, true),
    Rule::new(1392516000, Abbreviation::m03, -10800, false),
    Rule::new(1413687600, Abbreviation::m02, -7200, true),
    Rule::new(1424570400, Abbreviation::m03, -10800, false),
    Rule::new(1445137200, Abbreviation::m02, -7200, true),
    Rule::new(1456020000, Abbreviation::m03, -10800, false),
    Rule::new(1476586800, Abbreviation::m02, -7200, true),
    Rule::new(1487469600, Abbreviation::m03, -10800, false),
    Rule::new(1508036400, Abbreviation::m02, -7200, true),
    Rule::new(1518919200, Abbreviation::m03, -10800, false),
    Rule::new(1541300400, Abbreviation::m02, -7200, true),
    Rule::new(1550368800, Abbreviation::m03, -10800, false),
    Rule::new(2147483647, Abbreviation::m03, -10800, false),
];

static RULES_AMERICA_ST_JOHNS: [Rule; 240] = [
    Rule::new(-34359738367, Abbreviation::LMT, -12652, false),
    Rule::new(-2713897748, Abbreviation::NST, -12652, false),
    Rule::new(-1664130548, Abbreviation::NDT, -9052, true),
    Rule::new(-1650137348, Abbreviation::NST, -12652, false),
    Rule::new(-1632076148, Abbreviation::NDT, -9052, true),
    Rule::new(-1615145348, Abbreviation::NST, -12652, false),
    Rule::new(-1598650148, Abbreviation::NDT, -9052, true),
    Rule::new(-1590100148, Abbreviation::NST, -12652, false),
    Rule::new(-1567286948, Abbreviation::NDT, -9052, true),
    Rule::new(-1551565748, Abbreviation::NST, -12652, false),
    Rule::new(-1535837348, Abbreviation::NDT, -9052, true),
    Rule::new(-1520116148, Abbreviation::NST, -12652, false),
    Rule::new(-1503782948, Abbreviation::NDT, -9052, true),
    Rule::new(-1488666548, Abbreviation::NST, -12652, false),
    Rule::new(-1472333348, Abbreviation::NDT, -9052, true),
    Rule::new(-1457216948, Abbreviation::NST, -12652, false),
    Rule::new(-1440883748, Abbreviation::NDT, -9052, true),
    Rule::new(-1425767348, Abbreviation::NST, -12652, false),
    Rule::new(-1409434148, Abbreviation::NDT, -9052, true),
    Rule::new(-1394317748, Abbreviation::NST, -12652, false),
    Rule::new(-1377984548, Abbreviation::NDT, -9052, true),
    Rule::new(-1362263348, Abbreviation::NST, -12652, false),
    Rule::new(-1346534948, Abbreviation::NDT, -9052, true),
    Rule::new(-1330813748, Abbreviation::NST, -12652, false),
    Rule::new(-1314480548, Abbreviation::NDT, -9052, true),
    Rule::new(-1299364148, Abbreviation::NST, -12652, false),
    Rule::new(-1283030948, Abbreviation::NDT, -9052, true),
    Rule::new(-1267914548, Abbreviation::NST, -12652, false),
    Rule::new(-1251581348, Abbreviation::NDT, -9052, true),
    Rule::new(-1236464948, Abbreviation::NST, -12652, false),
    Rule::new(-1220131748, Abbreviation::NDT, -9052, true),
    Rule::new(-1205015348, Abbreviation::NST, -12652, false),
    Rule::new(-1188682148, Abbreviation::NDT, -9052, true),
    Rule::new(-1172960948, Abbreviation::NST, -12652, false),
    Rule::new(-1156627748, Abbreviation::NDT, -9052, true),
    Rule::new(-1141511348, Abbreviation::NST, -12652, false),
    Rule::new(-1125178148, Abbreviation::NDT, -9052, true),
    Rule::new(-1110061748, Abbreviation::NST, -12652, false),
    Rule::new(-1096921748, Abbreviation::NST, -12600, false),
    Rule::new(-1093728600, Abbreviation::NDT, -9000, true),
    Rule::new(-1078612200, Abbreviation::NST, -12600, false),
    Rule::new(-1061670600, Abbreviation::NDT, -9000, true),
    Rule::new(-1048973400, Abbreviation::NST, -12600, false),
    Rule::new(-1030221000, Abbreviation::NDT, -9000, true),
    Rule::new(-1017523800, Abbreviation::NST, -12600, false),
    Rule::new(-998771400, Abbreviation::NDT, -9000, true),
    Rule::new(-986074200, Abbreviation::NST, -12600, false),
    Rule::new(-966717000, Abbreviation::NDT, -9000, true),
    Rule::new(-954624600, Abbreviation::NST, -12600, false),
    Rule::new(-935267400, Abbreviation::NDT, -9000, true),
    Rule::new(-922570200, Abbreviation::NST, -12600, false),
    Rule::new(-903817800, Abbreviation::NDT, -9000, true),
    Rule::new(-891120600, Abbreviation::NST, -12600, false),
    Rule::new(-872368200, Abbreviation::NWT, -9000, true),
    Rule::new(-769395600, Abbreviation::NPT, -9000, true),
    Rule::new(-765401400, Abbreviation::NST, -12600, false),
    Rule::new(-746044200, Abbreviation::NDT, -9000, true),
    Rule::new(-733347000, Abbreviation::NST, -12600, false),
    Rule::new(-714594600, Abbreviation::NDT, -9000, true),
    Rule::new(-701897400, Abbreviation::NST, -12600, false),
    Rule::new(-683145000, Abbreviation::NDT, -9000, true),
    Rule::new(-670447800, Abbreviation::NST, -12600, false),
    Rule::new(-651695400, Abbreviation::NDT, -9000, true),
    Rule::new(-638998200, Abbreviation::NST, -12600, false),
    Rule::new(-619641000, Abbreviation::NDT, -9000, true),
    Rule::new(-606943800, Abbreviation::NST, -12600, false),
    Rule::new(-589401000, Abbreviation::NDT, -9000, true),
    Rule::new(-576099000, Abbreviation::NST, -12600, false),
    Rule::new(-557951400, Abbreviation::NDT, -9000, true),
    Rule::new(-544649400, Abbreviation::NST, -12600, false),
    Rule::new(-526501800, Abbreviation::NDT, -9000, true),
    Rule::new(-513199800, Abbreviation::NST, -12600, false),
    Rule::new(-495052200, Abbreviation::NDT, -9000, true),
    Rule::new(-481750200, Abbreviation::NST, -12600, false),
    Rule::new(-463602600, Abbreviation::NDT, -9000, true),
    Rule::new(-450300600, Abbreviation::NST, -12600, false),
    Rule::new(-431548200, Abbreviation::NDT, -9000, true),
    Rule::new(-418246200, Abbreviation::NST, -12600, false),
    Rule::new(-400098600, Abbreviation::NDT, -9000, true),
    Rule::new(-386796600, Abbreviation::NST, -12600, false),
    Rule::new(-368649000, Abbreviation::NDT, -9000, true),
    Rule::new(-355347000, Abbreviation::NST, -12600, false),
    Rule::new(-337199400, Abbreviation::NDT, -9000, true),
    Rule::new(-323897400, Abbreviation::NST, -12600, false),
    Rule::new(-305749800, Abbreviation::NDT, -9000, true),
    Rule::new(-289423800, Abbreviation::NST, -12600, false),
    Rule::new(-273695400, Abbreviation::NDT, -9000, true),
    Rule::new(-257974200, Abbreviation::NST, -12600, false),
    Rule::new(-242245800, Abbreviation::NDT, -9000, true),
    Rule::new(-226524600, Abbreviation::NST, -12600, false),
    Rule::new(-210796200, Abbreviation::NDT, -9000, true),
    Rule::new(-195075000, Abbreviation::NST, -12600, false),
    Rule::new(-179346600, Abbreviation::NDT, -9000, true),
    Rule::new(-163625400, Abbreviation::NST, -12600, false),
    Rule::new(-147897000, Abbreviation::NDT, -9000, true),
    Rule::new(-131571000, Abbreviation::NST, -12600, false),
    Rule::new(-116447400, Abbreviation::NDT, -9000, true),
    Rule::new(-100121400, Abbreviation::NST, -12600, false),
    Rule::new(-84393000, Abbreviation::NDT, -9000, true),
    Rule::new(-68671800, Abbreviation::NST, -12600, false),
    Rule::new(-52943400, Abbreviation::NDT, -9000, true),
    Rule::new(-37222200, Abbreviation::NST, -12600, false),
    Rule::new(-21493800, Abbreviation::NDT, -9000, true),
    Rule::new(-5772600, Abbreviation::NST, -12600, false),
    Rule::new(9955800, Abbreviation::NDT, -9000, true),
    Rule::new(25677000, Abbreviation::NST, -12600, false),
    Rule::new(41405400, Abbreviation::NDT, -9000, true),
    Rule::new(57731400, Abbreviation::NST, -12600, false),
    Rule::new(73459800, Abbreviation::NDT, -9000, true),
    Rule::new(89181000, Abbreviation::NST, -12600, false),
    Rule::new(104909400, Abbreviation::NDT, -9000, true),
    Rule::new(120630600, Abbreviation::NST, -12600, false),
    Rule::new(136359000, Abbreviation::NDT, -9000, true),
    Rule::new(152080200, Abbreviation::NST, -12600, false),
    Rule::new(167808600, Abbreviation::NDT, -9000, true),
    Rule::new(183529800, Abbreviation::NST, -12600, false),
    Rule::new(199258200, Abbreviation::NDT, -9000, true),
    Rule::new(215584200, Abbreviation::NST, -12600, false),
    Rule::new(230707800, Abbreviation::NDT, -9000, true),
    Rule::new(247033800, Abbreviation::NST, -12600, false),
    Rule::new(262762200, Abbreviation::NDT, -9000, true),
    Rule::new(278483400, Abbreviation::NST, -12600, false),
    Rule::new(294211800, Abbreviation::NDT, -9000, true),
    Rule::new(309933000, Abbreviation::NST, -12600, false),
    Rule::new(325661400, Abbreviation::NDT, -9000, true),
    Rule::new(341382600, Abbreviation::NST, -12600, false),
    Rule::new(357111000, Abbreviation::NDT, -9000, true),
    Rule::new(372832200, Abbreviation::NST, -12600, false),
    Rule::new(388560600, Abbreviation::NDT, -9000, true),
    Rule::new(404886600, Abbreviation::NST, -12600, false),
    Rule::new(420010200, Abbreviation::NDT, -9000, true),
    Rule::new(436336200, Abbreviation::NST, -12600, false),
    Rule::new(452064600, Abbreviation::NDT, -9000, true),
    Rule::new(467785800, Abbreviation::NST, -12600, false),
    Rule::new(483514200, Abbreviation::NDT, -9000, true),
    Rule::new(499235400, Abbreviation::NST, -12600, false),
    Rule::new(514963800, Abbreviation::NDT, -9000, true),
    Rule::new(530685000, Abbreviation::NST, -12600, false),
    Rule::new(544591860, Abbreviation::NDT, -9000, true),
    Rule::new(562127460, Abbreviation::NST, -12600, false),
    Rule::new(576041460, Abbreviation::NDDT, -5400, true),
    Rule::new(594178260, Abbreviation::NST, -12600, false),
    Rule::new(607491060, Abbreviation::NDT, -9000, true),
    Rule::new(625631460, Abbreviation::NST, -12600, false),
    Rule::new(638940660, Abbreviation::NDT, -9000, true),
    Rule::new(657081060, Abbreviation::NST, -12600, false),
    Rule::new(670995060, Abbreviation::NDT, -9000, true),
    Rule::new(688530660, Abbreviation::NST, -12600, false),
    Rule::new(702444660, Abbreviation::NDT, -9000, true),
    Rule::new(719980260, Abbreviation::NST, -12600, false),
    Rule::new(733894260, Abbreviation::NDT, -9000, true),
    Rule::new(752034660, Abbreviation::NST, -12600, false),
    Rule::new(765343860, Abbreviation::NDT, -9000, true),
    Rule::new(783484260, Abbreviation::NST, -12600, false),
    Rule::new(796793460, Abbreviation::NDT, -9000, true),
    Rule::new(814933860, Abbreviation::NST, -12600, false),
    Rule::new(828847860, Abbreviation::NDT, -9000, true),
    Rule::new(846383460, Abbreviation::NST, -12600, false),
    Rule::new(860297460, Abbreviation::NDT, -9000, true),
    Rule::new(877833060, Abbreviation::NST, -12600, false),
    Rule::new(891747060, Abbreviation::NDT, -9000, true),
    Rule::new(909282660, Abbreviation::NST, -12600, false),
    Rule::new(923196660, Abbreviation::NDT, -9000, true),
    Rule::new(941337060, Abbreviation::NST, -12600, false),
    Rule::new(954646260, Abbreviation::NDT, -9000, true),
    Rule::new(972786660, Abbreviation::NST, -12600, false),
    Rule::new(986095860, Abbreviation::NDT, -9000, true),
    Rule::new(1004236260, Abbreviation::NST, -12600, false),
    Rule::new(1018150260, Abbreviation::NDT, -9000, true),
    Rule::new(1035685860, Abbreviation::NST, -12600, false),
    Rule::new(1049599860, Abbreviation::NDT, -9000, true),
    Rule::new(1067135460, Abbreviation::NST, -12600, false),
    Rule::new(1081049460, Abbreviation::NDT, -9000, true),
    Rule::new(1099189860, Abbreviation::NST, -12600, false),
    Rule::new(1112499060, Abbreviation::NDT, -9000, true),
    Rule::new(1130639460, Abbreviation::NST, -12600, false),
    Rule::new(1143948660, Abbreviation::NDT, -9000, true),
    Rule::new(1162089060, Abbreviation::NST, -12600, false),
    Rule::new(1173583860, Abbreviation::NDT, -9000, true),
    Rule::new(1194143460, Abbreviation::NST, -12600, false),
    Rule::new(1205033460, Abbreviation::NDT, -9000, true),
    Rule::new(1225593060, Abbreviation::NST, -12600, false),
    Rule::new(1236483060, Abbreviation::NDT, -9000, true),
    Rule::new(1257042660, Abbreviation::NST, -12600, false),
    Rule::new(1268537460, Abbreviation::NDT, -9000, true),
    Rule::new(1289097060, Abbreviation::NST, -12600, false),
    Rule::new(1299987060, Abbreviation::NDT, -9000, true),
    Rule::new(1320553800, Abbreviation::NST, -12600, false),
    Rule::new(1331443800, Abbreviation::NDT, -9000, true),
    Rule::new(1352003400, Abbreviation::NST, -12600, false),
    Rule::new(1362893400, Abbreviation::NDT, -9000, true),
    Rule::new(1383453000, Abbreviation::NST, -12600, false),
    Rule::new(1394343000, Abbreviation::NDT, -9000, true),
    Rule::new(1414902600, Abbreviation::NST, -12600, false),
    Rule::new(1425792600, Abbreviation::NDT, -9000, true),
    Rule::new(1446352200, Abbreviation::NST, -12600, false),
    Rule::new(1457847000, Abbreviation::NDT, -9000, true),
    Rule::new(1478406600, Abbreviation::NST, -12600, false),
    Rule::new(1489296600, Abbreviation::NDT, -9000, true),
    Rule::new(1509856200, Abbreviation::NST, -12600, false),
    Rule::new(1520746200, Abbreviation::NDT, -9000, true),
    Rule::new(1541305800, Abbreviation::NST, -12600, false),
    Rule::new(1552195800, Abbreviation::NDT, -9000, true),
    Rule::new(1572755400, Abbreviation::NST, -12600, false),
    Rule::new(1583645400, Abbreviation::NDT, -9000, true),
    Rule::new(1604205000, Abbreviation::NST, -12600, false),
    Rule::new(1615699800, Abbreviation::NDT, -9000, true),
    Rule::new(1636259400, Abbreviation::NST, -12600, false),
    Rule::new(1647149400, Abbreviation::NDT, -9000, true),
    Rule::new(1667709000, Abbreviation::NST, -12600, false),
    Rule::new(1678599000, Abbreviation::NDT, -9000, true),
    Rule::new(1699158600, Abbreviation::NST, -12600, false),
    Rule::new(1710048600, Abbreviation::NDT, -9000, true),
    Rule::new(1730608200, Abbreviation::NST, -12600, false),
    Rule::new(1741498200, Abbreviation::NDT, -9000, true),
    Rule::new(1762057800, Abbreviation::NST, -12600, false),
    Rule::new(1772947800, Abbreviation::NDT, -9000, true),
    Rule::new(1793507400, Abbreviation::NST, -12600, false),
    Rule::new(1805002200, Abbreviation::NDT, -9000, true),
    Rule::new(1825561800, Abbreviation::NST, -12600, false),
    Rule::new(1836451800, Abbreviation::NDT, -9000, true),
    Rule::new(1857011400, Abbreviation::NST, -12600, false),
    Rule::new(1867901400, Abbreviation::NDT, -9000, true),
    Rule::new(1888461000, Abbreviation::NST, -12600, false),
    Rule::new(1899351000, Abbreviation::NDT, -9000, true),
    Rule::new(1919910600, Abbreviation::NST, -12600, false),
    Rule::new(1930800600, Abbreviation::NDT, -9000, true),
    Rule::new(1951360200, Abbreviation::NST, -12600, false),
    Rule::new(1962855000, Abbreviation::NDT, -9000, true),
    Rule::new(1983414600, Abbreviation::NST, -12600, false),
    Rule::new(1994304600, Abbreviation::NDT, -9000, true),
    Rule::new(2014864200, Abbreviation::NST, -12600, false),
    Rule::new(2025754200, Abbreviation::NDT, -9000, true),
    Rule::new(2046313800, Abbreviation::NST, -12600, false),
    Rule::new(2057203800, Abbreviation::NDT, -9000, true),
    Rule::new(2077763400, Abbreviation::NST, -12600, false),
    Rule::new(2088653400, Abbreviation::NDT, -9000, true),
    Rule::new(2109213000, Abbreviation::NST, -12600, false),
    Rule::new(2120103000, Abbreviation::NDT, -9000, true),
    Rule::new(2140662600, Abbreviation::NST, -12600, false),
];

static RULES_ASIA_KATHMANDU: [Rule; 4] = [
    Rule::new(-34359738367, Abbreviation::LMT, 20476, false),
    Rule::new(-1577943676, Abbreviation::p0530, 19800, false),
    Rule::new(504901800, Abbreviation::p0545, 20700, false),
    Rule::new(2147483647, Abbreviation::p0545, 20700, false),
];

static RULES_ASIA_KOLKATA: [Rule; 8] = [
    Rule::new(-34359738367, Abbreviation::LMT, 21208, false),
    Rule::new(-3645237208, Abbreviation::HMT, 21200, false),
    Rule::new(-3155694800, Abbreviation::MMT, 19270, false),
    Rule::new(-2019705670, Abbreviation::IST, 19800, false),
    Rule::new(-891581400, Abbreviation::p0630, 23400, true),
    Rule::new(-872058600, Abbreviation::IST, 19800, false),
    Rule::new(-862637400, Abbreviation::p0630, 23400, true),
    Rule::new(-764145000, Abbreviation::IST, 19800, false),
];

static RULES_ASIA_TOKYO: [Rule; 10] = [
    Rule::new(-34359738367, Abbreviation::LMT, 33539, false),
    Rule::new(-2587712400, Abbreviation::JST, 32400, false),
    Rule::new(-683802000, Abbreviation::JDT, 36000, true),
    Rule::new(-672310800, Abbreviation::JST, 32400, false),
    Rule::new(-654771600, Abbreviation::JDT, 36000, true),
    Rule::new(-640861200, Abbreviation::JST, 32400, false),
    Rule::new(-620298000, Abbreviation::JDT, 36000, true),
    Rule::new(-609411600, Abbreviation::JST, 32400, false),
    Rule::new(-588848400, Abbreviation::JDT, 36000, true),
    Rule::new(-577962000, Abbreviation::JST, 32400, false),
];

static RULES_AUSTRALIA_ADELAIDE: [Rule; 144] = [
    Rule::new(-34359738367, Abbreviation::LMT, 33260, false),
    Rule::new(-2364110060, Abbreviation::ACST, 32400, false),
    Rule::new(-2230189200, Abbreviation::ACST, 34200, false),
    Rule::new(-1672558200, Abbreviation::ACDT, 37800, true),
    Rule::new(-1665387000, Abbreviation::ACST, 34200, false),
    Rule::new(-883639800, Abbreviation::ACDT, 37800, true),
    Rule::new(-876123000, Abbreviation::ACST, 34200, false),
    Rule::new(-860398200, Abbreviation::ACDT, 37800, true),
    Rule::new(-844673400, Abbreviation::ACST, 34200, false),
    Rule::new(-828343800, Abbreviation::ACDT, 37800, true),
    Rule::new(-813223800, Abbreviation::ACST, 34200, false),
    Rule::new(57688200, Abbreviation::ACDT, 37800, true),
    Rule::new(67969800, Abbreviation::ACST, 34200, false),
    Rule::new(89137800, Abbreviation::ACDT, 37800, true),
    Rule::new(100024200, Abbreviation::ACST, 34200, false),
    Rule::new(120587400, Abbreviation::ACDT, 37800, true),
    Rule::new(131473800, Abbreviation::ACST, 34200, false),
    Rule::new(152037000, Abbreviation::ACDT, 37800, true),
    Rule::new(162923400, Abbreviation::ACST, 34200, false),
    Rule::new(183486600, Abbreviation::ACDT, 37800, true),
    Rule::new(194977800, Abbreviation::ACST, 34200, false),
    Rule::new(215541000, Abbreviation::ACDT, 37800, true),
    Rule::new(226427400, Abbreviation::ACST, 34200, false),
    Rule::new(246990600, Abbreviation::ACDT, 37800, true),
    Rule::new(257877000, Abbreviation::ACST, 34200, false),
    Rule::new(278440200, Abbreviation::ACDT, 37800, true),
    Rule::new(289326600, Abbreviation::ACST, 34200, false),
    Rule::new(309889800, Abbreviation::ACDT, 37800, true),
    Rule::new(320776200, Abbreviation::ACST, 34200, false),
    Rule::new(341339400, Abbreviation::ACDT, 37800, true),
    Rule::new(352225800, Abbreviation::ACST, 34200, false),
    Rule::new(372789000, Abbreviation::ACDT, 37800, true),
    Rule::new(384280200, Abbreviation::ACST, 34200, false),
    Rule::new(404843400, Abbreviation::ACDT, 37800, true),
    Rule::new(415729800, Abbreviation::ACST, 34200, false),
    Rule::new(436293000, Abbreviation::ACDT, 37800, true),
    Rule::new(447179400, Abbreviation::ACST, 34200, false),
    Rule::new(467742600, Abbreviation::ACDT, 37800, true),
    Rule::new(478629000, Abbreviation::ACST, 34200, false),
    Rule::new(499192200, Abbreviation::ACDT, 37800, true),
    Rule::new(511288200, Abbreviation::ACST, 34200, false),
    Rule::new(530037000, Abbreviation::ACDT, 37800, true),
    Rule::new(542737800, Abbreviation::ACST, 34200, false),
    Rule::new(562091400, Abbreviation::ACDT, 37800, true),
    Rule::new(574792200, Abbreviation::ACST, 34200, false),
    Rule::new(594145800, Abbreviation::ACDT, 37800, true),
    Rule::new(606241800, Abbreviation::ACST, 34200, false),
    Rule::new(625595400, Abbreviation::ACDT, 37800, true),
    Rule::new(637691400, Abbreviation::ACST, 34200, false),
    Rule::new(657045000, Abbreviation::ACDT, 37800, true),
    Rule::new(667931400, Abbreviation::ACST, 34200, false),
    Rule::new(688494600, Abbreviation::ACDT, 37800, true),
    Rule::new(701195400, Abbreviation::ACST, 34200, false),
    Rule::new(719944200, Abbreviation::ACDT, 37800, true),
    Rule::new(731435400, Abbreviation::ACST, 34200, false),
    Rule::new(751998600, Abbreviation::ACDT, 37800, true),
    Rule::new(764094600, Abbreviation::ACST, 34200, false),
    Rule::new(783448200, Abbreviation::ACDT, 37800, true),
    Rule::new(796149000, Abbreviation::ACST, 34200, false),
    Rule::new(814897800, Abbreviation::ACDT, 37800, true),
    Rule::new(828203400, Abbreviation::ACST, 34200, false),
    Rule::new(846347400, Abbreviation::ACDT, 37800, true),
    Rule::new(859653000, Abbreviation::ACST, 34200, false),
    Rule::new(877797000, Abbreviation::ACDT, 37800, true),
    Rule::new(891102600, Abbreviation::ACST, 34200, false),
    Rule::new(909246600, Abbreviation::ACDT, 37800, true),
    Rule::new(922552200, Abbreviation::ACST, 34200, false),
    Rule::new(941301000, Abbreviation::ACDT, 37800, true),
    Rule::new(954001800, Abbreviation::ACST, 34200, false),
    Rule::new(972750600, Abbreviation::ACDT, 37800, true),
    Rule::new(985451400, Abbreviation::ACST, 34200, false),
    Rule::new(1004200200, Abbreviation::ACDT, 37800, true),
    Rule::new(1017505800, Abbreviation::ACST, 34200, false),
    Rule::new(1035649800, Abbreviation::ACDT, 37800, true),
    Rule::new(1048955400, Abbreviation::ACST, 34200, false),
    Rule::new(1067099400, Abbreviation::ACDT, 37800, true),
    Rule::new(1080405000, Abbreviation::ACST, 34200, false),
    Rule::new(1099153800, Abbreviation::ACDT, 37800, true),
    Rule::new(1111854600, Abbreviation::ACST, 34200, false),
    Rule::new(1130603400, Abbreviation::ACDT, 37800, true),
    Rule::new(1143909000, Abbreviation::ACST, 34200, false),
    Rule::new(1162053000, Abbreviation::ACDT, 37800, true),
    Rule::new(1174753800, Abbreviation::ACST, 34200, false),
    Rule::new(1193502600, Abbreviation::ACDT, 37800, true),
    Rule::new(1207413000, Abbreviation::ACST, 34200, false),
    Rule::new(1223137800, Abbreviation::ACDT, 37800, true),
    Rule::new(1238862600, Abbreviation::ACST, 34200, false),
    Rule::new(1254587400, Abbreviation::ACDT, 37800, true),
    Rule::new(1270312200, Abbreviation::ACST, 34200, false),
    Rule::new(1286037000, Abbreviation::ACDT, 37800, true),
    Rule::new(1301761800, Abbreviation::ACST, 34200, false),
    Rule::new(1317486600, Abbreviation::ACDT, 37800, true),
    Rule::new(1333211400, Abbreviation::ACST, 34200, false),
    Rule::new(1349541000, Abbreviation::ACDT, 37800, true),
    Rule::new(1365265800, Abbreviation::ACST, 34200, false),
    Rule::new(1380990600, Abbreviation::ACDT, 37800, true),
    Rule::new(1396715400, Abbreviation::ACST, 34200, false),
    Rule::new(1412440200, Abbreviation::ACDT, 37800, true),
    Rule::new(1428165000, Abbreviation::ACST, 34200, false),
    Rule::new(1443889800, Abbreviation::ACDT, 37800, true),
    Rule::new(1459614600, Abbreviation::ACST, 34200, false),
    Rule::new(1475339400, Abbreviation::ACDT, 37800, true),
    Rule::new(1491064200, Abbreviation::ACST, 34200, false),
    Rule::new(1506789000, Abbreviation::ACDT, 37800, true),
    Rule::new(1522513800, Abbreviation::ACST, 34200, false),
    Rule::new(1538843400, Abbreviation::ACDT, 37800, true),
    Rule::new(1554568200, Abbreviation::ACST, 34200, false),
    Rule::new(1570293000, Abbreviation::ACDT, 37800, true),
    Rule::new(1586017800, Abbreviation::ACST, 34200, false),
    Rule::new(1601742600, Abbreviation::ACDT, 37800, true),
    Rule::new(1617467400, Abbreviation::ACST, 34200, false),
    Rule::new(1633192200, Abbreviation::ACDT, 37800, true),
    Rule::new(1648917000, Abbreviation::ACST, 34200, false),
    Rule::new(1664641800, Abbreviation::ACDT, 37800, true),
    Rule::new(1680366600, Abbreviation::ACST, 34200, false),
    Rule::new(1696091400, Abbreviation::ACDT, 37800, true),
    Rule::new(1712421000, Abbreviation::ACST, 34200, false),
    Rule::new(1728145800, Abbreviation::ACDT, 37800, true),
    Rule::new(1743870600, Abbreviation::ACST, 34200, false),
    Rule::new(1759595400, Abbreviation::ACDT, 37800, true),
    Rule::new(1775320200, Abbreviation::ACST, 34200, false),
    Rule::new(1791045000, Abbreviation::ACDT, 37800, true),
    Rule::new(1806769800, Abbreviation::ACST, 34200, false),
    Rule::new(1822494600, Abbreviation::ACDT, 37800, true),
    Rule::new(1838219400, Abbreviation::ACST, 34200, false),
    Rule::new(1853944200, Abbreviation::ACDT, 37800, true),
    Rule::new(1869669000, Abbreviation::ACST, 34200, false),
    Rule::new(1885998600, Abbreviation::ACDT, 37800, true),
    Rule::new(1901723400, Abbreviation::ACST, 34200, false),
    Rule::new(1917448200, Abbreviation::ACDT, 37800, true),
    Rule::new(1933173000, Abbreviation::ACST, 34200, false),
    Rule::new(1948897800, Abbreviation::ACDT, 37800, true),
    Rule::new(1964622600, Abbreviation::ACST, 34200, false),
    Rule::new(1980347400, Abbreviation::ACDT, 37800, true),
    Rule::new(1996072200, Abbreviation::ACST, 34200, false),
    Rule::new(2011797000, Abbreviation::ACDT, 37800, true),
    Rule::new(2027521800, Abbreviation::ACST, 34200, false),
    Rule::new(2043246600, Abbreviation::ACDT, 37800, true),
    Rule::new(2058971400, Abbreviation::ACST, 34200, false),
    Rule::new(2075301000, Abbreviation::ACDT, 37800, true),
    Rule::new(2091025800, Abbreviation::ACST, 34200, false),
    Rule::new(2106750600, Abbreviation::ACDT, 37800, true),
    Rule::new(2122475400, Abbreviation::ACST, 34200, false),
    Rule::new(2138200200, Abbreviation::ACDT, 37800, true),
];

static RULES_AUSTRALIA_SYDNEY: [Rule; 143] = [
    Rule::new(-34359738367, Abbreviation::LMT, 36292, false),
    Rule::new(-2364113092, Abbreviation::AEST, 36000, false),
    Rule::new(-1672560000, Abbreviation::AEDT, 39600, true),
    Rule::new(-1665388800, Abbreviation::AEST, 36000, false),
    Rule::new(-883641600, Abbreviation::AEDT, 39600, true),
    Rule::new(-876124800, Abbreviation::AEST, 36000, false),
    Rule::new(-860400000, Abbreviation::AEDT, 39600, true),
    Rule::new(-844675200, Abbreviation::AEST, 36000, false),
    Rule::new(-828345600, Abbreviation::AEDT, 39600, true),
    Rule::new(-813225600, Abbreviation::AEST, 36000, false),
    Rule::new(57686400, Abbreviation::AEDT, 39600, true),
    Rule::new(67968000, Abbreviation::AEST, 36000, false),
    Rule::new(89136000, Abbreviation::AEDT, 39600, true),
    Rule::new(100022400, Abbreviation::AEST, 36000, false),
    Rule::new(120585600, Abbreviation::AEDT, 39600, true),
    Rule::new(131472000, Abbreviation::AEST, 36000, false),
    Rule::new(152035200, Abbreviation::AEDT, 39600, true),
    Rule::new(162921600, Abbreviation::AEST, 36000, false),
    Rule::new(183484800, Abbreviation::AEDT, 39600, true),
    Rule::new(194976000, Abbreviation::AEST, 36000, false),
    Rule::new(215539200, Abbreviation::AEDT, 39600, true),
    Rule::new(226425600, Abbreviation::AEST, 36000, false),
    Rule::new(246988800, Abbreviation::AEDT, 39600, true),
    Rule::new(257875200, Abbreviation::AEST, 36000, false),
    Rule::new(278438400, Abbreviation::AEDT, 39600, true),
    Rule::new(289324800, Abbreviation::AEST, 36000, false),
    Rule::new(309888000, Abbreviation::AEDT, 39600, true),
    Rule::new(320774400, Abbreviation::AEST, 36000, false),
    Rule::new(341337600, Abbreviation::AEDT, 39600, true),
    Rule::new(352224000, Abbreviation::AEST, 36000, false),
    Rule::new(372787200, Abbreviation::AEDT, 39600, true),
    Rule::new(386697600, Abbreviation::AEST, 36000, false),
    Rule::new(404841600, Abbreviation::AEDT, 39600, true),
    Rule::new(415728000, Abbreviation::AEST, 36000, false),
    Rule::new(436291200, Abbreviation::AEDT, 39600, true),
    Rule::new(447177600, Abbreviation::AEST, 36000, false),
    Rule::new(467740800, Abbreviation::AEDT, 39600, true),
    Rule::new(478627200, Abbreviation::AEST, 36000, false),
    Rule::new(499190400, Abbreviation::AEDT, 39600, true),
    Rule::new(511286400, Abbreviation::AEST, 36000, false),
    Rule::new(530035200, Abbreviation::AEDT, 39600, true),
    Rule::new(542736000, Abbreviation::AEST, 36000, false),
    Rule::new(562089600, Abbreviation::AEDT, 39600, true),
    Rule::new(574790400, Abbreviation::AEST, 36000, false),
    Rule::new(594144000, Abbreviation::AEDT, 39600, true),
    Rule::new(606240000, Abbreviation::AEST, 36000, false),
    Rule::new(625593600, Abbreviation::AEDT, 39600, true),
    Rule::new(636480000, Abbreviation::AEST, 36000, false),
    Rule::new(657043200, Abbreviation::AEDT, 39600, true),
    Rule::new(667929600, Abbreviation::AEST, 36000, false),
    Rule::new(688492800, Abbreviation::AEDT, 39600, true),
    Rule::new(699379200, Abbreviation::AEST, 36000, false),
    Rule::new(719942400, Abbreviation::AEDT, 39600, true),
    Rule::new(731433600, Abbreviation::AEST, 36000, false),
    Rule::new(751996800, Abbreviation::AEDT, 39600, true),
    Rule::new(762883200, Abbreviation::AEST, 36000, false),
    Rule::new(783446400, Abbreviation::AEDT, 39600, true),
    Rule::new(794332800, Abbreviation::AEST, 36000, false),
    Rule::new(814896000, Abbreviation::AEDT, 39600, true),
    Rule::new(828201600, Abbreviation::AEST, 36000, false),
    Rule::new(846345600, Abbreviation::AEDT, 39600, true),
    Rule::new(859651200, Abbreviation::AEST, 36000, false),
    Rule::new(877795200, Abbreviation::AEDT, 39600, true),
    Rule::new(891100800, Abbreviation::AEST, 36000, false),
    Rule::new(909244800, Abbreviation::AEDT, 39600, true),
    Rule::new(922550400, Abbreviation::AEST, 36000, false),
    Rule::new(941299200, Abbreviation::AEDT, 39600, true),
    Rule::new(954000000, Abbreviation::AEST, 36000, false),
    Rule::new(967305600, Abbreviation::AEDT, 39600, true),
    Rule::new(985449600, Abbreviation::AEST, 36000, false),
    Rule::new(1004198400, Abbreviation::AEDT, 39600, true),
    Rule::new(1017504000, Abbreviation::AEST, 36000, false),
    Rule::new(1035648000, Abbreviation::AEDT, 39600, true),
    Rule::new(1048953600, Abbreviation::AEST, 36000, false),
    Rule::new(1067097600, Abbreviation::AEDT, 39600, true),
    Rule::new(1080403200, Abbreviation::AEST, 36000, false),
    Rule::new(1099152000, Abbreviation::AEDT, 39600, true),
    Rule::new(1111852800, Abbreviation::AEST, 36000, false),
    Rule::new(1130601600, Abbreviation::AEDT, 39600, true),
    Rule::new(1143907200, Abbreviation::AEST, 36000, false),
    Rule::new(1162051200, Abbreviation::AEDT, 39600, true),
    Rule::new(1174752000, Abbreviation::AEST, 36000, false),
    Rule::new(1193500800, Abbreviation::AEDT, 39600, true),
    Rule::new(1207411200, Abbreviation::AEST, 36000, false),
    Rule::new(1223136000, Abbreviation::AEDT, 39600, true),
    Rule::new(1238860800, Abbreviation::AEST, 36000, false),
    Rule::new(1254585600, Abbreviation::AEDT, 39600, true),
    Rule::new(1270310400, Abbreviation::AEST, 36000, false),
    Rule::new(1286035200, Abbreviation::AEDT, 39600, true),
    Rule::new(1301760000, Abbreviation::AEST, 36000, false),
    Rule::new(1317484800, Abbreviation::AEDT, 39600, true),
    Rule::new(1333209600, Abbreviation::AEST, 36000, false),
    Rule::new(1349539200, Abbreviation::AEDT, 39600, true),
    Rule::new(1365264000, Abbreviation::AEST, 36000, false),
    Rule::new(1380988800, Abbreviation::AEDT, 39600, true),
    Rule::new(1396713600, Abbreviation::AEST, 36000, false),
    Rule::new(1412438400, Abbreviation::AEDT, 39600, true),
    Rule::new(1428163200, Abbreviation::AEST, 36000, false),
    Rule::new(1443888000, Abbreviation::AEDT, 39600, true),
    Rule::new(1459612800, Abbreviation::AEST, 36000, false),
    Rule::new(1475337600, Abbreviation::AEDT, 39600, true),
    Rule::new(1491062400, Abbreviation::AEST, 36000, false),
    Rule::new(1506787200, Abbreviation::AEDT, 39600, true),
    Rule::new(1522512000, Abbreviation::AEST, 36000, false),
    Rule::new(1538841600, Abbreviation::AEDT, 39600, true),
    Rule::new(1554566400, Abbreviation::AEST, 36000, false),
    Rule::new(1570291200, Abbreviation::AEDT, 39600, true),
    Rule::new(1586016000, Abbreviation::AEST, 36000, false),
    Rule::new(1601740800, Abbreviation::AEDT, 39600, true),
    Rule::new(1617465600, Abbreviation::AEST, 36000, false),
    Rule::new(1633190400, Abbreviation::AEDT, 39600, true),
    Rule::new(1648915200, Abbreviation::AEST, 36000, false),
    Rule::new(1664640000, Abbreviation::AEDT, 39600, true),
    Rule::new(1680364800, Abbreviation::AEST, 36000, false),
    Rule::new(1696089600, Abbreviation::AEDT, 39600, true),
    Rule::new(1712419200, Abbreviation::AEST, 36000, false),
    Rule::new(1728144000, Abbreviation::AEDT, 39600, true),
    Rule::new(1743868800, Abbreviation::AEST, 36000, false),
    Rule::new(1759593600, Abbreviation::AEDT, 39600, true),
    Rule::new(1775318400, Abbreviation::AEST, 36000, false),
    Rule::new(1791043200, Abbreviation::AEDT, 39600, true),
    Rule::new(1806768000, Abbreviation::AEST, 36000, false),
    Rule::new(1822492800, Abbreviation::AEDT, 39600, true),
    Rule::new(1838217600, Abbreviation::AEST, 36000, false),
    Rule::new(1853942400, Abbreviation::AEDT, 39600, true),
    Rule::new(1869667200, Abbreviation::AEST, 36000, false),
    Rule::new(1885996800, Abbreviation::AEDT, 39600, true),
    Rule::new(1901721600, Abbreviation::AEST, 36000, false),
    Rule::new(1917446400, Abbreviation::AEDT, 39600, true),
    Rule::new(1933171200, Abbreviation::AEST, 36000, false),
    Rule::new(1948896000, Abbreviation::AEDT, 39600, true),
    Rule::new(1964620800, Abbreviation::AEST, 36000, false),
    Rule::new(1980345600, Abbreviation::AEDT, 39600, true),
    Rule::new(1996070400, Abbreviation::AEST, 36000, false),
    Rule::new(2011795200, Abbreviation::AEDT, 39600, true),
    Rule::new(2027520000, Abbreviation::AEST, 36000, false),
    Rule::new(2043244800, Abbreviation::AEDT, 39600, true),
    Rule::new(2058969600, Abbreviation::AEST, 36000, false),
    Rule::new(2075299200, Abbreviation::AEDT, 39600, true),
    Rule::new(2091024000, Abbreviation::AEST, 36000, false),
    Rule::new(2106748800, Abbreviation::AEDT, 39600, true),
    Rule::new(2122473600, Abbreviation::AEST, 36000, false),
    Rule::new(2138198400, Abbreviation::AEDT, 39600, true),
];

static RULES_EUROPE_DUBLIN: [Rule; 229] = [
    Rule::new(-34359738367, Abbreviation::LMT, -1521, false),
    Rule::new(-2821649679, Abbreviation::DMT, -1521, false),
    Rule::new(-1691962479, Abbreviation::IST, 2079, true),
    Rule::new(-1680471279, Abbreviation::GMT, 0, false),
    Rule::new(-1664143200, Abbreviation::BST, 3600, true),
    Rule::new(-1650146400, Abbreviation::GMT, 0, false),
    Rule::new(-1633903200, Abbreviation::BST, 3600, true),
    Rule::new(-1617487200, Abbreviation::GMT, 0, false),
    Rule::new(-1601848800, Abbreviation::BST, 3600, true),
    Rule::new(-1586037600, Abbreviation::GMT, 0, false),
    Rule::new(-1570399200, Abbreviation::BST, 3600, true),
    Rule::new(-1552168800, Abbreviation::GMT, 0, false),
    Rule::new(-1538344800, Abbreviation::BST, 3600, true),
    Rule::new(-1522533600, Abbreviation::GMT, 0, false),
    Rule::new(-1507500000, Abbreviation::IST, 3600, true),
    Rule::new(-1490565600, Abbreviation::GMT, 0, false),
    Rule::new(-1473631200, Abbreviation::IST, 3600, true),
    Rule::new(-1460930400, Abbreviation::GMT, 0, false),
    Rule::new(-1442786400, Abbreviation::IST, 3600, true),
    Rule::new(-1428876000, Abbreviation::GMT, 0, false),
    Rule::new(-1410732000, Abbreviation::IST, 3600, true),
    Rule::new(-1396216800, Abbreviation::GMT, 0, false),
    Rule::new(-1379282400, Abbreviation::IST, 3600, true),
    Rule::new(-1364767200, Abbreviation::GMT, 0, false),
    Rule::new(-1348437600, Abbreviation::IST, 3600, true),
    Rule::new(-1333317600, Abbreviation::GMT, 0, false),
    Rule::new(-1315778400, Abbreviation::IST, 3600, true),
    Rule::new(-1301263200, Abbreviation::GMT, 0, false),
    Rule::new(-1284328800, Abbreviation::IST, 3600, true),
    Rule::new(-1269813600, Abbreviation::GMT, 0, false),
    Rule::new(-1253484000, Abbreviation::IST, 3600, true),
    Rule::new(-1238364000, Abbreviation::GMT, 0, false),
    Rule::new(-1221429600, Abbreviation::IST, 3600, true),
    Rule::new(-1206914400, Abbreviation::GMT, 0, false),
    Rule::new(-1189980000, Abbreviation::IST, 3600, true),
    Rule::new(-1175464800, Abbreviation::GMT, 0, false),
    Rule::new(-1159135200, Abbreviation::IST, 3600, true),
    Rule::new(-1143410400, Abbreviation::GMT, 0, false),
    Rule::new(-1126476000, Abbreviation::IST, 3600, true),
    Rule::new(-1111960800, Abbreviation::GMT, 0, false),
    Rule::new(-1095631200, Abbreviation::IST, 3600, true),
    Rule::new(-1080511200, Abbreviation::GMT, 0, false),
    Rule::new(-1063576800, Abbreviation::IST, 3600, true),
    Rule::new(-1049061600, Abbreviation::GMT, 0, false),
    Rule::new(-1032127200, Abbreviation::IST, 3600, true),
    Rule::new(-1017612000, Abbreviation::GMT, 0, false),
    Rule::new(-1001282400, Abbreviation::IST, 3600, true),
    Rule::new(-986162400, Abbreviation::GMT, 0, false),
    Rule::new(-969228000, Abbreviation::IST, 3600, true),
    Rule::new(-950479200, Abbreviation::GMT, 0, false),
    Rule::new(-942012000, Abbreviation::IST, 3600, true),
    Rule::new(-733356000, Abbreviation::GMT, 0, false),
    Rule::new(-719445600, Abbreviation::IST, 3600, true),
    Rule::new(-699487200, Abbreviation::GMT, 0, false),
    Rule::new(-684972000, Abbreviation::IST, 3600, true),
    Rule::new(-668037600, Abbreviation::GMT, 0, false),
    Rule::new(-654732000, Abbreviation::IST, 3600, true),
    Rule::new(-636588000, Abbreviation::GMT, 0, false),
    Rule::new(-622072800, Abbreviation::IST, 3600, true),
    Rule::new(-605743200, Abbreviation::GMT, 0, false),
    Rule::new(-590623200, Abbreviation::IST, 3600, true),
    Rule::new(-574293600, Abbreviation::GMT, 0, false),
    Rule::new(-558568800, Abbreviation::IST, 3600, true),
    Rule::new(-542239200, Abbreviation::GMT, 0, false),
    Rule::new(-527119200, Abbreviation::IST, 3600, true),
    Rule::new(-512604000, Abbreviation::GMT, 0, false),
    Rule::new(-496274400, Abbreviation::IST, 3600, true),
    Rule::new(-481154400, Abbreviation::GMT, 0, false),
    Rule::new(-464220000, Abbreviation::IST, 3600, true),
    Rule::new(-449704800, Abbreviation::GMT, 0, false),
    Rule::new(-432165600, Abbreviation::IST, 3600, true),
    Rule::new(-417650400, Abbreviation::GMT, 0, false),
    Rule::new(-401320800, Abbreviation::IST, 3600, true),
    Rule::new(-386200800, Abbreviation::GMT, 0, false),
    Rule::new(-369266400, Abbreviation::IST, 3600, true),
    Rule::new(-354751200, Abbreviation::GMT, 0, false),
    Rule::new(-337816800, Abbreviation::IST, 3600, true),
    Rule::new(-323301600, Abbreviation::GMT, 0, false),
    Rule::new(-306972000, Abbreviation::IST, 3600, true),
    Rule::new(-291852000, Abbreviation::GMT, 0, false),
    Rule::new(-276732000, Abbreviation::IST, 3600, true),
    Rule::new(-257983200, Abbreviation::GMT, 0, false),
    Rule::new(-245282400, Abbreviation::IST, 3600, true),
    Rule::new(-226533600, Abbreviation::GMT, 0, false),
    Rule::new(-213228000, Abbreviation::IST, 3600, true),
    Rule::new(-195084000, Abbreviation::GMT, 0, false),
    Rule::new(-182383200, Abbreviation::IST, 3600, true),
    Rule::new(-163634400, Abbreviation::GMT, 0, false),
    Rule::new(-150933600, Abbreviation::IST, 3600, true),
    Rule::new(-132184800, Abbreviation::GMT, 0, false),
    Rule::new(-119484000, Abbreviation::IST, 3600, true),
    Rule::new(-100735200, Abbreviation::GMT, 0, false),
    Rule::new(-88034400, Abbreviation::IST, 3600, true),
    Rule::new(-68680800, Abbreviation::GMT, 0, false),
    Rule::new(-59004000, Abbreviation::IST, 3600, true),
    Rule::new(-37242000, Abbreviation::IST, 3600, false),
    Rule::new(57722400, Abbreviation::GMT, 0, true),
    Rule::new(69818400, Abbreviation::IST, 3600, false),
    Rule::new(89172000, Abbreviation::GMT, 0, true),
    Rule::new(101268000, Abbreviation::IST, 3600, false),
    Rule::new(120621600, Abbreviation::GMT, 0, true),
    Rule::new(132717600, Abbreviation::IST, 3600, false),
    Rule::new(152071200, Abbreviation::GMT, 0, true),
    Rule::new(164167200, Abbreviation::IST, 3600, false),
    Rule::new(183520800, Abbreviation::GMT, 0, true),
    Rule::new(196221600, Abbreviation::IST, 3600, false),
    Rule::new(214970400, Abbreviation::GMT, 0, true),
    Rule::new(227671200, Abbreviation::IST, 3600, false),
    Rule::new(246420000, Abbreviation::GMT, 0, true),
    Rule::new(259120800, Abbreviation::IST, 3600, false),
    Rule::new(278474400, Abbreviation::GMT, 0, true),
    Rule::new(290570400, Abbreviation::IST, 3600, false),
    Rule::new(309924000, Abbreviation::GMT, 0, true),
    Rule::new(322020000, Abbreviation::IST, 3600, false),
    Rule::new(341373600, Abbreviation::GMT, 0, true),
    Rule::new(354675600, Abbreviation::IST, 3600, false),
    Rule::new(372819600, Abbreviation::GMT, 0, true),
    Rule::new(386125200, Abbreviation::IST, 3600, false),
    Rule::new(404269200, Abbreviation::GMT, 0, true),
    Rule::new(417574800, Abbreviation::IST, 3600, false),
    Rule::new(435718800, Abbreviation::GMT, 0, true),
    Rule::new(449024400, Abbreviation::IST, 3600, false),
    Rule::new(467773200, Abbreviation::GMT, 0, true),
    Rule::new(481078800, Abbreviation::IST, 3600, false),
    Rule::new(499222800, Abbreviation::GMT, 0, true),
    Rule::new(512528400, Abbreviation::IST, 3600, false),
    Rule::new(530672400, Abbreviation::GMT, 0, true),
    Rule::new(543978000, Abbreviation::IST, 3600, false),
    Rule::new(562122000, Abbreviation::GMT, 0, true),
    Rule::new(575427600, Abbreviation::IST, 3600, false),
    Rule::new(593571600, Abbreviation::GMT, 0, true),
    Rule::new(606877200, Abbreviation::IST, 3600, false),
    Rule::new(625626000, Abbreviation::GMT, 0, true),
    Rule::new(638326800, Abbreviation::IST, 3600, false),
    Rule::new(657075600, Abbreviation::GMT, 0, true),
    Rule::new(670381200, Abbreviation::IST, 3600, false),
    Rule::new(688525200, Abbreviation::GMT, 0, true),
    Rule::new(701830800, Abbreviation::IST, 3600, false),
    Rule::new(719974800, Abbreviation::GMT, 0, true),
    Rule::new(733280400, Abbreviation::IST, 3600, false),
    Rule::new(751424400, Abbreviation::GMT, 0, true),
    Rule::new(764730000, Abbreviation::IST, 3600, false),
    Rule::new(782874000, Abbreviation::GMT, 0, true),
    Rule::new(796179600, Abbreviation::IST, 3600, false),
    Rule::new(814323600, Abbreviation::GMT, 0, true),
    Rule::new(828234000, Abbreviation::IST, 3600, false),
    Rule::new(846378000, Abbreviation::GMT, 0, true),
    Rule::new(859683600, Abbreviation::IST, 3600, false),
    Rule::new(877827600, Abbreviation::GMT, 0, true),
    Rule::new(891133200, Abbreviation::IST, 3600, false),
    Rule::new(909277200, Abbreviation::GMT, 0, true),
    Rule::new(922582800, Abbreviation::IST, 3600, false),
    Rule::new(941331600, Abbreviation::GMT, 0, true),
    Rule::new(954032400, Abbreviation::IST, 3600, false),
    Rule::new(972781200, Abbreviation::GMT, 0, true),
    Rule::new(985482000, Abbreviation::IST, 3600, false),
    Rule::new(1004230800, Abbreviation::GMT, 0, true),
    Rule::new(1017536400, Abbreviation::IST, 3600, false),
    Rule::new(1035680400, Abbreviation::GMT, 0, true),
    Rule::new(1048986000, Abbreviation::IST, 3600, false),
    Rule::new(1067130000, Abbreviation::GMT, 0, true),
    Rule::new(1080435600, Abbreviation::IST, 3600, false),
    Rule::new(1099184400, Abbreviation::GMT, 0, true),
    Rule::new(1111885200, Abbreviation::IST, 3600, false),
    Rule::new(1130634000, Abbreviation::GMT, 0, true),
    Rule::new(1143334800, Abbreviation::IST, 3600, false),
    Rule::new(1162083600, Abbreviation::GMT, 0, true),
    Rule::new(1174784400, Abbreviation::IST, 3600, false),
    Rule::new(1193533200, Abbreviation::GMT, 0, true),
    Rule::new(1206838800, Abbreviation::IST, 3600, false),
    Rule::new(1224982800, Abbreviation::GMT, 0, true),
    Rule::new(1238288400, Abbreviation::IST, 3600, false),
    Rule::new(1256432400, Abbreviation::GMT, 0, true),
    Rule::new(1269738000, Abbreviation::IST, 3600, false),
    Rule::new(1288486800, Abbreviation::GMT, 0, true),
    Rule::new(1301187600, Abbreviation::IST, 3600, false),
    Rule::new(1319936400, Abbreviation::GMT, 0, true),
    Rule::new(1332637200, Abbreviation::IST, 3600, false),
    Rule::new(1351386000, Abbreviation::GMT, 0, true),
    Rule::new(1364691600, Abbreviation::IST, 3600, false),
    Rule::new(1382835600, Abbreviation::GMT, 0, true),
    Rule::new(1396141200, Abbreviation::IST, 3600, false),
    Rule::new(1414285200, Abbreviation::GMT, 0, true),
    Rule::new(1427590800, Abbreviation::IST, 3600, false),
    Rule::new(1445734800, Abbreviation::GMT, 0, true),
    Rule::new(1459040400, Abbreviation::IST, 3600, false),
    Rule::new(1477789200, Abbreviation::GMT, 0, true),
    Rule::new(1490490000, Abbreviation::IST, 3600, false),
    Rule::new(1509238800, Abbreviation::GMT, 0, true),
    Rule::new(1521939600, Abbreviation::IST, 3600, false),
    Rule::new(1540688400, Abbreviation::GMT, 0, true),
    Rule::new(1553994000, Abbreviation::IST, 3600, false),
    Rule::new(1572138000, Abbreviation::GMT, 0, true),
    Rule::new(1585443600, Abbreviation::IST, 3600, false),
    Rule::new(1603587600, Abbreviation::GMT, 0, true),
    Rule::new(1616893200, Abbreviation::IST, 3600, false),
    Rule::new(1635642000, Abbreviation::GMT, 0, true),
    Rule::new(1648342800, Abbreviation::IST, 3600, false),
    Rule::new(1667091600, Abbreviation::GMT, 0, true),
    Rule::new(1679792400, Abbreviation::IST, 3600, false),
    Rule::new(1698541200, Abbreviation::GMT, 0, true),
    Rule::new(1711846800, Abbreviation::IST, 3600, false),
    Rule::new(1729990800, Abbreviation::GMT, 0, true),
    Rule::new(1743296400, Abbreviation::IST, 3600, false),
    Rule::new(1761440400, Abbreviation::GMT, 0, true),
    Rule::new(1774746000, Abbreviation::IST, 3600, false),
    Rule::new(1792890000, Abbreviation::GMT, 0, true),
    Rule::new(1806195600, Abbreviation::IST, 3600, false),
    Rule::new(1824944400, Abbreviation::GMT, 0, true),
    Rule::new(1837645200, Abbreviation::IST, 3600, false),
    Rule::new(1856394000, Abbreviation::GMT, 0, true),
    Rule::new(1869094800, Abbreviation::IST, 3600, false),
    Rule::new(1887843600, Abbreviation::GMT, 0, true),
    Rule::new(1901149200, Abbreviation::IST, 3600, false),
    Rule::new(1919293200, Abbreviation::GMT, 0, true),
    Rule::new(1932598800, Abbreviation::IST, 3600, false),
    Rule::new(1950742800, Abbreviation::GMT, 0, true),
    Rule::new(1964048400, Abbreviation::IST, 3600, false),
    Rule::new(1982797200, Abbreviation::GMT, 0, true),
    Rule::new(1995498000, Abbreviation::IST, 3600, false),
    Rule::new(2014246800, Abbreviation::GMT, 0, true),
    Rule::new(2026947600, Abbreviation::IST, 3600, false),
    Rule::new(2045696400, Abbreviation::GMT, 0, true),
    Rule::new(2058397200, Abbreviation::IST, 3600, false),
    Rule::new(2077146000, Abbreviation::GMT, 0, true),
    Rule::new(2090451600, Abbreviation::IST, 3600, false),
    Rule::new(2108595600, Abbreviation::GMT, 0, true),
    Rule::new(2121901200, Abbreviation::IST, 3600, false),
    Rule::new(2140045200, Abbreviation::GMT, 0, true),
];

static RULES_EUROPE_LONDON: [Rule; 243] = [
    Rule::new(-34359738367, Abbreviation::LMT, -75, false),
    Rule::new(-3852662325, Abbreviation::GMT, 0, false),
    Rule::new(-1691964000, Abbreviation::BST, 3600, true),
    Rule::new(-1680472800, Abbreviation::GMT, 0, false),
    Rule::new(-1664143200, Abbreviation::BST, 3600, true),
    Rule::new(-1650146400, Abbreviation::GMT, 0, false),
    Rule::new(-1633903200, Abbreviation::BST, 3600, true),
    Rule::new(-1617487200, Abbreviation::GMT, 0, false),
    Rule::new(-1601848800, Abbreviation::BST, 3600, true),
    Rule::new(-1586037600, Abbreviation::GMT, 0, false),
    Rule::new(-1570399200, Abbreviation::BST, 3600, true),
    Rule::new(-1552168800, Abbreviation::GMT, 0, false),
    Rule::new(-1538344800, Abbreviation::BST, 3600, true),
    Rule::new(-1522533600, Abbreviation::GMT, 0, false),
    Rule::new(-1507500000, Abbreviation::BST, 3600, true),
    Rule::new(-1490565600, Abbreviation::GMT, 0, false),
    Rule::new(-1473631200, Abbreviation::BST, 3600, true),
    Rule::new(-1460930400, Abbreviation::GMT, 0, false),
    Rule::new(-1442786400, Abbreviation::BST, 3600, true),
    Rule::new(-1428876000, Abbreviation::GMT, 0, false),
    Rule::new(-1410732000, Abbreviation::BST, 3600, true),
    Rule::new(-1396216800, Abbreviation::GMT, 0, false),
    Rule::new(-1379282400, Abbreviation::BST, 3600, true),
    Rule::new(-1364767200, Abbreviation::GMT, 0, false),
    Rule::new(-1348437600, Abbreviation::BST, 3600, true),
    Rule::new(-1333317600, Abbreviation::GMT, 0, false),
    Rule::new(-1315778400, Abbreviation::BST, 3600, true),
    Rule::new(-1301263200, Abbreviation::GMT, 0, false),
    Rule::new(-1284328800, Abbreviation::BST, 3600, true),
    Rule::new(-1269813600, Abbreviation::GMT, 0, false),
    Rule::new(-1253484000, Abbreviation::BST, 3600, true),
    Rule::new(-1238364000, Abbreviation::GMT, 0, false),
    Rule::new(-1221429600, Abbreviation::BST, 3600, true),
    Rule::new(-1206914400, Abbreviation::GMT, 0, false),
    Rule::new(-1189980000, Abbreviation::BST, 3600, true),
    Rule::new(-1175464800, Abbreviation::GMT, 0, false),
    Rule::new(-1159135200, Abbreviation::BST, 3600, true),
    Rule::new(-1143410400, Abbreviation::GMT, 0, false),
    Rule::new(-1126476000, Abbreviation::BST, 3600, true),
    Rule::new(-1111960800, Abbreviation::GMT, 0, false),
    Rule::new(-1095631200, Abbreviation::BST, 3600, true),
    Rule::new(-1080511200, Abbreviation::GMT, 0, false),
    Rule::new(-1063576800, Abbreviation::BST, 3600, true),
    Rule::new(-1049061600, Abbreviation::GMT, 0, false),
    Rule::new(-1032127200, Abbreviation::BST, 3600, true),
    Rule::new(-1017612000, Abbreviation::GMT, 0, false),
    Rule::new(-1001282400, Abbreviation::BST, 3600, true),
    Rule::new(-986162400, Abbreviation::GMT, 0, false),
    Rule::new(-969228000, Abbreviation::BST, 3600, true),
    Rule::new(-950479200, Abbreviation::GMT, 0, false),
    Rule::new(-942012000, Abbreviation::BST, 3600, true),
    Rule::new(-904518000, Abbreviation::BDST, 7200, true),
    Rule::new(-896050800, Abbreviation::BST, 3600, true),
    Rule::new(-875487600, Abbreviation::BDST, 7200, true),
    Rule::new(-864601200, Abbreviation::BST, 3600, true),
    Rule::new(-844038000, Abbreviation::BDST, 7200, true),
    Rule::new(-832546800, Abbreviation::BST, 3600, true),
    Rule::new(-812588400, Abbreviation::BDST, 7200, true),
    Rule::new(-798073200, Abbreviation::BST, 3600, true),
    Rule::new(-781052400, Abbreviation::BDST, 7200, true),
    Rule::new(-772066800, Abbreviation::BST, 3600, true),
    Rule::new(-764805600, Abbreviation::GMT, 0, false),
    Rule::new(-748476000, Abbreviation::BST, 3600, true),
    Rule::new(-733356000, Abbreviation::GMT, 0, false),
    Rule::new(-719445600, Abbreviation::BST, 3600, true),
    Rule::new(-717030000, Abbreviation::BDST, 7200, true),
    Rule::new(-706748400, Abbreviation::BST, 3600, true),
    Rule::new(-699487200, Abbreviation::GMT, 0, false),
    Rule::new(-687996000, Abbreviation::BST, 3600, true),
    Rule::new(-668037600, Abbreviation::GMT, 0, false),
    Rule::new(-654732000, Abbreviation::BST, 3600, true),
    Rule::new(-636588000, Abbreviation::GMT, 0, false),
    Rule::new(-622072800, Abbreviation::BST, 3600, true),
    Rule::new(-605743200, Abbreviation::GMT, 0, false),
    Rule::new(-590623200, Abbreviation::BST, 3600, true),
    Rule::new(-574293600, Abbreviation::GMT, 0, false),
    Rule::new(-558568800, Abbreviation::BST, 3600, true),
    Rule::new(-542239200, Abbreviation::GMT, 0, false),
    Rule::new(-527119200, Abbreviation::BST, 3600, true),
    Rule::new(-512604000, Abbreviation::GMT, 0, false),
    Rule::new(-496274400, Abbreviation::BST, 3600, true),
    Rule::new(-481154400, Abbreviation::GMT, 0, false),
    Rule::new(-464220000, Abbreviation::BST, 3600, true),
    Rule::new(-449704800, Abbreviation::GMT, 0, false),
    Rule::new(-432165600, Abbreviation::BST, 3600, true),
    Rule::new(-417650400, Abbreviation::GMT, 0, false),
    Rule::new(-401320800, Abbreviation::BST, 3600, true),
    Rule::new(-386200800, Abbreviation::GMT, 0, false),
    Rule::new(-369266400, Abbreviation::BST, 3600, true),
    Rule::new(-354751200, Abbreviation::GMT, 0, false),
    Rule::new(-337816800, Abbreviation::BST, 3600, true),
    Rule::new(-323301600, Abbreviation::GMT, 0, false),
    Rule::new(-306972000, Abbreviation::BST, 3600, true),
    Rule::new(-291852000, Abbreviation::GMT, 0, false),
    Rule::new(-276732000, Abbreviation::BST, 3600, true),
    Rule::new(-257983200, Abbreviation::GMT, 0, false),
    Rule::new(-245282400, Abbreviation::BST, 3600, true),
    Rule::new(-226533600, Abbreviation::GMT, 0, false),
    Rule::new(-213228000, Abbreviation::BST, 3600, true),
    Rule::new(-195084000, Abbreviation::GMT, 0, false),
    Rule::new(-182383200, Abbreviation::BST, 3600, true),
    Rule::new(-163634400, Abbreviation::GMT, 0, false),
    Rule::new(-150933600, Abbreviation::BST, 3600, true),
    Rule::new(-132184800, Abbreviation::GMT, 0, false),
    Rule::new(-119484000, Abbreviation::BST, 3600, true),
    Rule::new(-100735200, Abbreviation::GMT, 0, false),
    Rule::new(-88034400, Abbreviation::BST, 3600, true),
    Rule::new(-68680800, Abbreviation::GMT, 0, false),
    Rule::new(-59004000, Abbreviation::BST, 3600, true),
    Rule::new(-37242000, Abbreviation::BST, 3600, false),
    Rule::new(57722400, Abbreviation::GMT, 0, false),
    Rule::new(69818400, Abbreviation::BST, 3600, true),
    Rule::new(89172000, Abbreviation::GMT, 0, false),
    Rule::new(101268000, Abbreviation::BST, 3600, true),
    Rule::new(120621600, Abbreviation::GMT, 0, false),
    Rule::new(132717600, Abbreviation::BST, 3600, true),
    Rule::new(152071200, Abbreviation::GMT, 0, false),
    Rule::new(164167200, Abbreviation::BST, 3600, true),
    Rule::new(183520800, Abbreviation::GMT, 0, false),
    Rule::new(196221600, Abbreviation::BST, 3600, true),
    Rule::new(214970400, Abbreviation::GMT, 0, false),
    Rule::new(227671200, Abbreviation::BST, 3600, true),
    Rule::new(246420000, Abbreviation::GMT, 0, false),
    Rule::new(259120800, Abbreviation::BST, 3600, true),
    Rule::new(278474400, Abbreviation::GMT, 0, false),
    Rule::new(290570400, Abbreviation::BST, 3600, true),
    Rule::new(309924000, Abbreviation::GMT, 0, false),
    Rule::new(322020000, Abbreviation::BST, 3600, true),
    Rule::new(341373600, Abbreviation::GMT, 0, false),
    Rule::new(354675600, Abbreviation::BST, 3600, true),
    Rule::new(372819600, Abbreviation::GMT, 0, false),
    Rule::new(386125200, Abbreviation::BST, 3600, true),
    Rule::new(404269200, Abbreviation::GMT, 0, false),
    Rule::new(417574800, Abbreviation::BST, 3600, true),
    Rule::new(435718800, Abbreviation::GMT, 0, false),
    Rule::new(449024400, Abbreviation::BST, 3600, true),
    Rule::new(467773200, Abbreviation::GMT, 0, false),
    Rule::new(481078800, Abbreviation::BST, 3600, true),
    Rule::new(499222800, Abbreviation::GMT, 0, false),
    Rule::new(512528400, Abbreviation::BST, 3600, true),
    Rule::new(530672400, Abbreviation::GMT, 0, false),
    Rule::new(543978000, Abbreviation::BST, 3600, true),
    Rule::new(562122000, Abbreviation::GMT, 0, false),
    Rule::new(575427600, Abbreviation::BST, 3600, true),
    Rule::new(593571600, Abbreviation::GMT, 0, false),
    Rule::new(606877200, Abbreviation::BST, 3600, true),
    Rule::new(625626000, Abbreviation::GMT, 0, false),
    Rule::new(638326800, Abbreviation::BST, 3600, true),
    Rule::new(657075600, Abbreviation::GMT, 0, false),
    Rule::new(670381200, Abbreviation::BST, 3600, true),
    Rule::new(688525200, Abbreviation::GMT, 0, false),
    Rule::new(701830800, Abbreviation::BST, 3600, true),
    Rule::new(719974800, Abbreviation::GMT, 0, false),
    Rule::new(733280400, Abbreviation::BST, 3600, true),
    Rule::new(751424400, Abbreviation::GMT, 0, false),
    Rule::new(764730000, Abbreviation::BST, 3600, true),
    Rule::new(782874000, Abbreviation::GMT, 0, false),
    Rule::new(796179600, Abbreviation::BST, 3600, true),
    Rule::new(814323600, Abbreviation::GMT, 0, false),
    Rule::new(828234000, Abbreviation::BST, 3600, true),
    Rule::new(846378000, Abbreviation::GMT, 0, false),
    Rule::new(859683600, Abbreviation::BST, 3600, true),
    Rule::new(877827600, Abbreviation::GMT, 0, false),
    Rule::new(891133200, Abbreviation::BST, 3600, true),
    Rule::new(909277200, Abbreviation::GMT, 0, false),
    Rule::new(922582800, Abbreviation::BST, 3600, true),
    Rule::new(941331600, Abbreviation::GMT, 0, false),
    Rule::new(954032400, Abbreviation::BST, 3600, true),
    Rule::new(972781200, Abbreviation::GMT, 0, false),
    Rule::new(985482000, Abbreviation::BST, 3600, true),
    Rule::new(1004230800, Abbreviation::GMT, 0, false),
    Rule::new(1017536400, Abbreviation::BST, 3600, true),
    Rule::new(1035680400, Abbreviation::GMT, 0, false),
    Rule::new(1048986000, Abbreviation::BST, 3600, true),
    Rule::new(1067130000, Abbreviation::GMT, 0, false),
    Rule::new(1080435600, Abbreviation::BST, 3600, true),
    Rule::new(1099184400, Abbreviation::GMT, 0, false),
    Rule::new(1111885200, Abbreviation::BST, 3600, true),
    Rule::new(1130634000, Abbreviation::GMT, 0, false),
    Rule::new(1143334800, Abbreviation::BST, 3600, true),
    Rule::new(1162083600, Abbreviation::GMT, 0, false),
    Rule::new(1174784400, Abbreviation::BST, 3600, true),
    Rule::new(1193533200, Abbreviation::GMT, 0, false),
    Rule::new(1206838800, Abbreviation::BST, 3600, true),
    Rule::new(1224982800, Abbreviation::GMT, 0, false),
    Rule::new(1238288400, Abbreviation::BST, 3600, true),
    Rule::new(1256432400, Abbreviation::GMT, 0, false),
    Rule::new(1269738000, Abbreviation::BST, 3600, true),
    Rule::new(1288486800, Abbreviation::GMT, 0, false),
    Rule::new(1301187600, Abbreviation::BST, 3600, true),
    Rule::new(1319936400, Abbreviation::GMT, 0, false),
    Rule::new(1332637200, Abbreviation::BST, 3600, true),
    Rule::new(1351386000, Abbreviation::GMT, 0, false),
    Rule::new(1364691600, Abbreviation::BST, 3600, true),
    Rule::new(1382835600, Abbreviation::GMT, 0, false),
    Rule::new(1396141200, Abbreviation::BST, 3600, true),
    Rule::new(1414285200, Abbreviation::GMT, 0, false),
    Rule::new(1427590800, Abbreviation::BST, 3600, true),
    Rule::new(1445734800, Abbreviation::GMT, 0, false),
    Rule::new(1459040400, Abbreviation::BST, 3600, true),
    Rule::new(1477789200, Abbreviation::GMT, 0, false),
    Rule::new(1490490000, Abbreviation::BST, 3600, true),
    Rule::new(1509238800, Abbreviation::GMT, 0, false),
    Rule::new(1521939600, Abbreviation::BST, 3600, true),
    Rule::new(1540688400, Abbreviation::GMT, 0, false),
    Rule::new(1553994000, Abbreviation::BST, 3600, true),
    Rule::new(1572138000, Abbreviation::GMT, 0, false),
    Rule::new(1585443600, Abbreviation::BST, 3600, true),
    Rule::new(1603587600, Abbreviation::GMT, 0, false),
    Rule::new(1616893200, Abbreviation::BST, 3600, true),
    Rule::new(1635642000, Abbreviation::GMT, 0, false),
    Rule::new(1648342800, Abbreviation::BST, 3600, true),
    Rule::new(1667091600, Abbreviation::GMT, 0, false),
    Rule::new(1679792400, Abbreviation::BST, 3600, true),
    Rule::new(1698541200, Abbreviation::GMT, 0, false),
    Rule::new(1711846800, Abbreviation::BST, 3600, true),
    Rule::new(1729990800, Abbreviation::GMT, 0, false),
    Rule::new(1743296400, Abbreviation::BST, 3600, true),
    Rule::new(1761440400, Abbreviation::GMT, 0, false),
    Rule::new(1774746000, Abbreviation::BST, 3600, true),
    Rule::new(1792890000, Abbreviation::GMT, 0, false),
    Rule::new(1806195600, Abbreviation::BST, 3600, true),
    Rule::new(1824944400, Abbreviation::GMT, 0, false),
    Rule::new(1837645200, Abbreviation::BST, 3600, true),
    Rule::new(1856394000, Abbreviation::GMT, 0, false),
    Rule::new(1869094800, Abbreviation::BST, 3600, true),
    Rule::new(1887843600, Abbreviation::GMT, 0, false),
    Rule::new(1901149200, Abbreviation::BST, 3600, true),
    Rule::new(1919293200, Abbreviation::GMT, 0, false),
    Rule::new(1932598800, Abbreviation::BST, 3600, true),
    Rule::new(1950742800, Abbreviation::GMT, 0, false),
    Rule::new(1964048400, Abbreviation::BST, 3600, true),
    Rule::new(1982797200, Abbreviation::GMT, 0, false),
    Rule::new(1995498000, Abbreviation::BST, 3600, true),
    Rule::new(2014246800, Abbreviation::GMT, 0, false),
    Rule::new(2026947600, Abbreviation::BST, 3600, true),
    Rule::new(2045696400, Abbreviation::GMT, 0, false),
    Rule::new(2058397200, Abbreviation::BST, 3600, true),
    Rule::new(2077146000, Abbreviation::GMT, 0, false),
    Rule::new(2090451600, Abbreviation::BST, 3600, true),
    Rule::new(2108595600, Abbreviation::GMT, 0, false),
    Rule::new(2121901200, Abbreviation::BST, 3600, true),
    Rule::new(2140045200, Abbreviation::GMT, 0, false),
];

static RULES_EUROPE_PARIS: [Rule; 185] = [
    Rule::new(-34359738367, Abbreviation::LMT, 561, false),
    Rule::new(-2486592561, Abbreviation::PMT, 561, false),
    Rule::new(-1855958961, Abbreviation::WET, 0, false),
    Rule::new(-1689814800, Abbreviation::WEST, 3600, true),
    Rule::new(-1680397200, Abbreviation::WET, 0, false),
    Rule::new(-1665363600, Abbreviation::WEST, 3600, true),
    Rule::new(-1648342800, Abbreviation::WET, 0, false),
    Rule::new(-1635123600, Abbreviation::WEST, 3600, true),
    Rule::new(-1616893200, Abbreviation::WET, 0, false),
    Rule::new(-1604278800, Abbreviation::WEST, 3600, true),
    Rule::new(-1585443600, Abbreviation::WET, 0, false),
    Rule::new(-1574038800, Abbreviation::WEST, 3600, true),
    Rule::new(-1552266000, Abbreviation::WET, 0, false),
    Rule::new(-1539997200, Abbreviation::WEST, 3600, true),
    Rule::new(-1520557200, Abbreviation::WET, 0, false),
    Rule::new(-1507510800, Abbreviation::WEST, 3600, true),
    Rule::new(-1490576400, Abbreviation::WET, 0, false),
    Rule::new(-1470618000, Abbreviation::WEST, 3600, true),
    Rule::new(-1459126800, Abbreviation::WET, 0, false),
    Rule::new(-1444006800, Abbreviation::WEST, 3600, true),
    Rule::new(-1427677200, Abbreviation::WET, 0, false),
    Rule::new(-1411952400, Abbreviation::WEST, 3600, true),
    Rule::new(-1396227600, Abbreviation::WET, 0, false),
    Rule::new(-1379293200, Abbreviation::WEST, 3600, true),
    Rule::new(-1364778000, Abbreviation::WET, 0, false),
    Rule::new(-1348448400, Abbreviation::WEST, 3600, true),
    Rule::new(-1333328400, Abbreviation::WET, 0, false),
    Rule::new(-1316394000, Abbreviation::WEST, 3600, true),
    Rule::new(-1301274000, Abbreviation::WET, 0, false),
    Rule::new(-1284339600, Abbreviation::WEST, 3600, true),
    Rule::new(-1269824400, Abbreviation::WET, 0, false),
    Rule::new(-1253494800, Abbreviation::WEST, 3600, true),
    Rule::new(-1238374800, Abbreviation::WET, 0, false),
    Rule::new(-1221440400, Abbreviation::WEST, 3600, true),
    Rule::new(-1206925200, Abbreviation::WET, 0, false),
    Rule::new(-1191200400, Abbreviation::WEST, 3600, true),
    Rule::new(-1175475600, Abbreviation::WET, 0, false),
    Rule::new(-1160355600, Abbreviation::WEST, 3600, true),
    Rule::new(-1143421200, Abbreviation::WET, 0, false),
    Rule::new(-1127696400, Abbreviation::WEST, 3600, true),
    Rule::new(-1111971600, Abbreviation::WET, 0, false),
    Rule::new(-1096851600, Abbreviation::WEST, 3600, true),
    Rule::new(-1080522000, Abbreviation::WET, 0, false),
    Rule::new(-1063587600, Abbreviation::WEST, 3600, true),
    Rule::new(-1049072400, Abbreviation::WET, 0, false),
    Rule::new(-1033347600, Abbreviation::WEST, 3600, true),
    Rule::new(-1017622800, Abbreviation::WET, 0, false),
    Rule::new(-1002502800, Abbreviation::WEST, 3600, true),
    Rule::new(-986173200, Abbreviation::WET, 0, false),
    Rule::new(-969238800, Abbreviation::WEST, 3600, true),
    Rule::new(-950490000, Abbreviation::WET, 0, false),
    Rule::new(-942012000, Abbreviation::WEST, 3600, true),
    Rule::new(-932436000, Abbreviation::CEST, 7200, true),
    Rule::new(-857257200, Abbreviation::CET, 3600, false),
    Rule::new(-844556400, Abbreviation::CEST, 7200, true),
    Rule::new(-828226800, Abbreviation::CET, 3600, false),
    Rule::new(-812502000, Abbreviation::CEST, 7200, true),
    Rule::new(-800071200, Abbreviation::WEMT, 7200, true),
    Rule::new(-796266000, Abbreviation::WEST, 3600, true),
    Rule::new(-781052400, Abbreviation::WEMT, 7200, true),
    Rule::new(-766623600, Abbreviation::CET, 3600, false),
    Rule::new(196819200, Abbreviation::CEST, 7200, true),
    Rule::new(212540400, Abbreviation::CET, 3600, false),
    Rule::new(228877200, Abbreviation::CEST, 7200, true),
    Rule::new(243997200, Abbreviation::CET, 3600, false),
    Rule::new(260326800, Abbreviation::CEST, 7200, true),
    Rule::new(276051600, Abbreviation::CET, 3600, false),
    Rule::new(291776400, Abbreviation::CEST, 7200, true),
    Rule::new(307501200, Abbreviation::CET, 3600, false),
    Rule::new(323830800, Abbreviation::CEST, 7200, true),
    Rule::new(338950800, Abbreviation::CET, 3600, false),
    Rule::new(354675600, Abbreviation::CEST, 7200, true),
    Rule::new(370400400, Abbreviation::CET, 3600, false),
    Rule::new(386125200, Abbreviation::CEST, 7200, true),
    Rule::new(401850000, Abbreviation::CET, 3600, false),
    Rule::new(417574800, Abbreviation::CEST, 7200, true),
    Rule::new(433299600, Abbreviation::CET, 3600, false),
    Rule::new(449024400, Abbreviation::CEST, 7200, true),
    Rule::new(465354000, Abbreviation::CET, 3600, false),
    Rule::new(481078800, Abbreviation::CEST, 7200, true),
    Rule::new(496803600, Abbreviation::CET, 3600, false),
    Rule::new(512528400, Abbreviation::CEST, 7200, true),
    Rule::new(528253200, Abbreviation::CET, 3600, false),
    Rule::new(543978000, Abbreviation::CEST, 7200, true),
    Rule::new(559702800, Abbreviation::CET, 3600, false),
    Rule::new(575427600, Abbreviation::CEST, 7200, true),
    Rule::new(591152400, Abbreviation::CET, 3600, false),
    Rule::new(606877200, Abbreviation::CEST, 7200, true),
    Rule::new(622602000, Abbreviation::CET, 3600, false),
    Rule::new(638326800, Abbreviation::CEST, 7200, true),
    Rule::new(654656400, Abbreviation::CET, 3600, false),
    Rule::new(670381200, Abbreviation::CEST, 7200, true),
    Rule::new(686106000, Abbreviation::CET, 3600, false),
    Rule::new(701830800, Abbreviation::CEST, 7200, true),
    Rule::new(717555600, Abbreviation::CET, 3600, false),
    Rule::new(733280400, Abbreviation::CEST, 7200, true),
    Rule::new(749005200, Abbreviation::CET, 3600, false),
    Rule::new(764730000, Abbreviation::CEST, 7200, true),
    Rule::new(780454800, Abbreviation::CET, 3600, false),
    Rule::new(796179600, Abbreviation::CEST, 7200, true),
    Rule::new(811904400, Abbreviation::CET, 3600, false),
    Rule::new(828234000, Abbreviation::CEST, 7200, true),
    Rule::new(846378000, Abbreviation::CET, 3600, false),
    Rule::new(859683600, Abbreviation::CEST, 7200, true),
    Rule::new(877827600, Abbreviation::CET, 3600, false),
    Rule::new(891133200, Abbreviation::CEST, 7200, true),
    Rule::new(909277200, Abbreviation::CET, 3600, false),
    Rule::new(922582800, Abbreviation::CEST, 7200, true),
    Rule::new(941331600, Abbreviation::CET, 3600, false),
    Rule::new(954032400, Abbreviation::CEST, 7200, true),
    Rule::new(972781200, Abbreviation::CET, 3600, false),
    Rule::new(985482000, Abbreviation::CEST, 7200, true),
    Rule::new(1004230800, Abbreviation::CET, 3600, false),
    Rule::new(1017536400, Abbreviation::CEST, 7200, true),
    Rule::new(1035680400, Abbreviation::CET, 3600, false),
    Rule::new(1048986000, Abbreviation::CEST, 7200, true),
    Rule::new(1067130000, Abbreviation::CET, 3600, false),
    Rule::new(1080435600, Abbreviation::CEST, 7200, true),
    Rule::new(1099184400, Abbreviation::CET, 3600, false),
    Rule::new(1111885200, Abbreviation::CEST, 7200, true),
    Rule::new(1130634000, Abbreviation::CET, 3600, false),
    Rule::new(1143334800, Abbreviation::CEST, 7200, true),
    Rule::new(1162083600, Abbreviation::CET, 3600, false),
    Rule::new(1174784400, Abbreviation::CEST, 7200, true),
    Rule::new(1193533200, Abbreviation::CET, 3600, false),
    Rule::new(1206838800, Abbreviation::CEST, 7200, true),
    Rule::new(1224982800, Abbreviation::CET, 3600, false),
    Rule::new(1238288400, Abbreviation::CEST, 7200, true),
    Rule::new(1256432400, Abbreviation::CET, 3600, false),
    Rule::new(1269738000, Abbreviation::CEST, 7200, true),
    Rule::new(1288486800, Abbreviation::CET, 3600, false),
    Rule::new(1301187600, Abbreviation::CEST, 7200, true),
    Rule::new(1319936400, Abbreviation::CET, 3600, false),
    Rule::new(1332637200, Abbreviation::CEST, 7200, true),
    Rule::new(1351386000, Abbreviation::CET, 3600, false),
    Rule::new(1364691600, Abbreviation::CEST, 7200, true),
    Rule::new(1382835600, Abbreviation::CET, 3600, false),
    Rule::new(1396141200, Abbreviation::CEST, 7200, true),
    Rule::new(1414285200, Abbreviation::CET, 3600, false),
    Rule::new(1427590800, Abbreviation::CEST, 7200, true),
    Rule::new(1445734800, Abbreviation::CET, 3600, false),
    Rule::new(1459040400, Abbreviation::CEST, 7200, true),
    Rule::new(1477789200, Abbreviation::CET, 3600, false),
    Rule::new(1490490000, Abbreviation::CEST, 7200, true),
    Rule::new(1509238800, Abbreviation::CET, 3600, false),
    Rule::new(1521939600, Abbreviation::CEST, 7200, true),
    Rule::new(1540688400, Abbreviation::CET, 3600, false),
    Rule::new(1553994000, Abbreviation::CEST, 7200, true),
    Rule::new(1572138000, Abbreviation::CET, 3600, false),
    Rule::new(1585443600, Abbreviation::CEST, 7200, true),
    Rule::new(1603587600, Abbreviation::CET, 3600, false),
    Rule::new(1616893200, Abbreviation::CEST, 7200, true),
    Rule::new(1635642000, Abbreviation::CET, 3600, false),
    Rule::new(1648342800, Abbreviation::CEST, 7200, true),
    Rule::new(1667091600, Abbreviation::CET, 3600, false),
    Rule::new(1679792400, Abbreviation::CEST, 7200, true),
    Rule::new(1698541200, Abbreviation::CET, 3600, false),
    Rule::new(1711846800, Abbreviation::CEST, 7200, true),
    Rule::new(1729990800, Abbreviation::CET, 3600, false),
    Rule::new(1743296400, Abbreviation::CEST, 7200, true),
    Rule::new(1761440400, Abbreviation::CET, 3600, false),
    Rule::new(1774746000, Abbreviation::CEST, 7200, true),
    Rule::new(1792890000, Abbreviation::CET, 3600, false),
    Rule::new(1806195600, Abbreviation::CEST, 7200, true),
    Rule::new(1824944400, Abbreviation::CET, 3600, false),
    Rule::new(1837645200, Abbreviation::CEST, 7200, true),
    Rule::new(1856394000, Abbreviation::CET, 3600, false),
    Rule::new(1869094800, Abbreviation::CEST, 7200, true),
    Rule::new(1887843600, Abbreviation::CET, 3600, false),
    Rule::new(1901149200, Abbreviation::CEST, 7200, true),
    Rule::new(1919293200, Abbreviation::CET, 3600, false),
    Rule::new(1932598800, Abbreviation::CEST, 7200, true),
    Rule::new(1950742800, Abbreviation::CET, 3600, false),
    Rule::new(1964048400, Abbreviation::CEST, 7200, true),
    Rule::new(1982797200, Abbreviation::CET, 3600, false),
    Rule::new(1995498000, Abbreviation::CEST, 7200, true),
    Rule::new(2014246800, Abbreviation::CET, 3600, false),
    Rule::new(2026947600, Abbreviation::CEST, 7200, true),
    Rule::new(2045696400, Abbreviation::CET, 3600, false),
    Rule::new(2058397200, Abbreviation::CEST, 7200, true),
    Rule::new(2077146000, Abbreviation::CET, 3600, false),
    Rule::new(2090451600, Abbreviation::CEST, 7200, true),
    Rule::new(2108595600, Abbreviation::CET, 3600, false),
    Rule::new(2121901200, Abbreviation::CEST, 7200, true),
    Rule::new(2140045200, Abbreviation::CET, 3600, false),
];

static RULES_PACIFIC_APIA: [Rule; 28] = [
    Rule::new(-34359738367, Abbreviation::LMT, 45184, false),
    Rule::new(-2445424384, Abbreviation::LMT, -41216, false),
    Rule::new(-1861878784, Abbreviation::m1130, -41400, false),
    Rule::new(-631110600, Abbreviation::m11, -39600, false),
    Rule::new(1285498800, Abbreviation::m10, -36000, true),
    Rule::new(1301752800, Abbreviation::m11, -39600, false),
    Rule::new(1316872800, Abbreviation::m10, -36000, true),
    Rule::new(1325239200, Abbreviation::p14, 50400, true),
    Rule::new(1333202400, Abbreviation::p13, 46800, false),
    Rule::new(1348927200, Abbreviation::p14, 50400, true),
    Rule::new(1365256800, Abbreviation::p13, 46800, false),
    Rule::new(1380376800, Abbreviation::p14, 50400, true),
    Rule::new(1396706400, Abbreviation::p13, 46800, false),
    Rule::new(1411826400, Abbreviation::p14, 50400, true),
    Rule::new(1428156000, Abbreviation::p13, 46800, false),
    Rule::new(1443276000, Abbreviation::p14, 50400, true),
    Rule::new(1459605600, Abbreviation::p13, 46800, false),
    Rule::new(1474725600, Abbreviation::p14, 50400, true),
    Rule::new(1491055200, Abbreviation::p13, 46800, false),
    Rule::new(1506175200, Abbreviation::p14, 50400, true),
    Rule::new(1522504800, Abbreviation::p13, 46800, false),
    Rule::new(1538229600, Abbreviation::p14, 50400, true),
    Rule::new(1554559200, Abbreviation::p13, 46800, false),
    Rule::new(1569679200, Abbreviation::p14, 50400, true),
    Rule::new(1586008800, Abbreviation::p13, 46800, false),
    Rule::new(1601128800, Abbreviation::p14, 50400, true),
    Rule::new(1617458400, Abbreviation::p13, 46800, false),
    Rule::new(2147483647, Abbreviation::p13, 46800, false),
];

static RULES_PACIFIC_AUCKLAND: [Rule; 157] = [
    Rule::new(-34359738367, Abbreviation::LMT, 41944, false),
    Rule::new(-3192435544, Abbreviation::NZMT, 41400, false),
    Rule::new(-1330335000, Abbreviation::NZST, 45000, true),
    Rule::new(-1320057000, Abbreviation::NZMT, 41400, false),
    Rule::new(-1300699800, Abbreviation::NZST, 43200, true),
    Rule::new(-1287396000, Abbreviation::NZMT, 41400, false),
    Rule::new(-1269250200, Abbreviation::NZST, 43200, true),
    Rule::new(-1255946400, Abbreviation::NZMT, 41400, false),
    Rule::new(-1237800600, Abbreviation::NZST, 43200, true),
    Rule::new(-1224496800, Abbreviation::NZMT, 41400, false),
    Rule::new(-1206351000, Abbreviation::NZST, 43200, true),
    Rule::new(-1192442400, Abbreviation::NZMT, 41400, false),
    Rule::new(-1174901400, Abbreviation::NZST, 43200, true),
    Rule::new(-1160992800, Abbreviation::NZMT, 41400, false),
    Rule::new(-1143451800, Abbreviation::NZST, 43200, true),
    Rule::new(-1125914400, Abbreviation::NZMT, 41400, false),
    Rule::new(-1112607000, Abbreviation::NZST, 43200, true),
    Rule::new(-1094464800, Abbreviation::NZMT, 41400, false),
    Rule::new(-1081157400, Abbreviation::NZST, 43200, true),
    Rule::new(-1063015200, Abbreviation::NZMT, 41400, false),
    Rule::new(-1049707800, Abbreviation::NZST, 43200, true),
    Rule::new(-1031565600, Abbreviation::NZMT, 41400, false),
    Rule::new(-1018258200, Abbreviation::NZST, 43200, true),
    Rule::new(-1000116000, Abbreviation::NZMT, 41400, false),
    Rule::new(-986808600, Abbreviation::NZST, 43200, true),
    Rule::new(-968061600, Abbreviation::NZMT, 41400, false),
    Rule::new(-955359000, Abbreviation::NZST, 43200, true),
    Rule::new(-936612000, Abbreviation::NZMT, 41400, false),
    Rule::new(-923304600, Abbreviation::NZST, 43200, true),
    Rule::new(-757425600, Abbreviation::NZST, 43200, false),
    Rule::new(152632800, Abbreviation::NZDT, 46800, true),
    Rule::new(162309600, Abbreviation::NZST, 43200, false),
    Rule::new(183477600, Abbreviation::NZDT, 46800, true),
    Rule::new(194968800, Abbreviation::NZST, 43200, false),
    Rule::new(215532000, Abbreviation::NZDT, 46800, true),
    Rule::new(226418400, Abbreviation::NZST, 43200, false),
    Rule::new(246981600, Abbreviation::NZDT, 46800, true),
    Rule::new(257868000, Abbreviation::NZST, 43200, false),
    Rule::new(278431200, Abbreviation::NZDT, 46800, true),
    Rule::new(289317600, Abbreviation::NZST, 43200, false),
    Rule::new(309880800, Abbreviation::NZDT, 46800, true),
    Rule::new(320767200, Abbreviation::NZST, 43200, false),
    Rule::new(341330400, Abbreviation::NZDT, 46800, true),
    Rule::new(352216800, Abbreviation::NZST, 43200, false),
    Rule::new(372780000, Abbreviation::NZDT, 46800, true),
    Rule::new(384271200, Abbreviation::NZST, 43200, false),
    Rule::new(404834400, Abbreviation::NZDT, 46800, true),
    Rule::new(415720800, Abbreviation::NZST, 43200, false),
    Rule::new(436284000, Abbreviation::NZDT, 46800, true),
    Rule::new(447170400, Abbreviation::NZST, 43200, false),
    Rule::new(467733600, Abbreviation::NZDT, 46800, true),
    Rule::new(478620000, Abbreviation::NZST, 43200, false),
    Rule::new(499183200, Abbreviation::NZDT, 46800, true),
    Rule::new(510069600, Abbreviation::NZST, 43200, false),
    Rule::new(530632800, Abbreviation::NZDT, 46800, true),
    Rule::new(541519200, Abbreviation::NZST, 43200, false),
    Rule::new(562082400, Abbreviation::NZDT, 46800, true),
    Rule::new(573573600, Abbreviation::NZST, 43200, false),
    Rule::new(594136800, Abbreviation::NZDT, 46800, true),
    Rule::new(605023200, Abbreviation::NZST, 43200, false),
    Rule::new(623772000, Abbreviation::NZDT, 46800, true),
    Rule::new(637682400, Abbreviation::NZST, 43200, false),
    Rule::new(655221600, Abbreviation::NZDT, 46800, true),
    Rule::new(669132000, Abbreviation::NZST, 43200, false),
    Rule::new(686671200, Abbreviation::NZDT, 46800, true),
    Rule::new(700581600, Abbreviation::NZST, 43200, false),
    Rule::new(718120800, Abbreviation::NZDT, 46800, true),
    Rule::new(732636000, Abbreviation::NZST, 43200, false),
    Rule::new(749570400, Abbreviation::NZDT, 46800, true),
    Rule::new(764085600, Abbreviation::NZST, 43200, false),
    Rule::new(781020000, Abbreviation::NZDT, 46800, true),
    Rule::new(795535200, Abbreviation::NZST, 43200, false),
    Rule::new(812469600, Abbreviation::NZDT, 46800, true),
    Rule::new(826984800, Abbreviation::NZST, 43200, false),
    Rule::new(844524000, Abbreviation::NZDT, 46800, true),
    Rule::new(858434400, Abbreviation::NZST, 43200, false),
    Rule::new(875973600, Abbreviation::NZDT, 46800, true),
    Rule::new(889884000, Abbreviation::NZST, 43200, false),
    Rule::new(907423200, Abbreviation::NZDT, 46800, true),
    Rule::new(921938400, Abbreviation::NZST, 43200, false),
    Rule::new(938872800, Abbreviation::NZDT, 46800, true),
    Rule::new(953388000, Abbreviation::NZST, 43200, false),
    Rule::new(970322400, Abbreviation::NZDT, 46800, true),
    Rule::new(984837600, Abbreviation::NZST, 43200, false),
    Rule::new(1002376800, Abbreviation::NZDT, 46800, true),
    Rule::new(1016287200, Abbreviation::NZST, 43200, false),
    Rule::new(1033826400, Abbreviation::NZDT, 46800, true),
    Rule::new(1047736800, Abbreviation::NZST, 43200, false),
    Rule::new(1065276000, Abbreviation::NZDT, 46800, true),
    Rule::new(1079791200, Abbreviation::NZST, 43200, false),
    Rule::new(1096725600, Abbreviation::NZDT, 46800, true),
    Rule::new(1111240800, Abbreviation::NZST, 43200, false),
    Rule::new(1128175200, Abbreviation::NZDT, 46800, true),
    Rule::new(1142690400, Abbreviation::NZST, 43200, false),
    Rule::new(1159624800, Abbreviation::NZDT, 46800, true),
    Rule::new(1174140000, Abbreviation::NZST, 43200, false),
    Rule::new(1191074400, Abbreviation::NZDT, 46800, true),
    Rule::new(1207404000, Abbreviation::NZST, 43200, false),
    Rule::new(1222524000, Abbreviation::NZDT, 46800, true),
    Rule::new(1238853600, Abbreviation::NZST, 43200, false),
    Rule::new(1253973600, Abbreviation::NZDT, 46800, true),
    Rule::new(1270303200, Abbreviation::NZST, 43200, false),
    Rule::new(1285423200, Abbreviation::NZDT, 46800, true),
    Rule::new(1301752800, Abbreviation::NZST, 43200, false),
    Rule::new(1316872800, Abbreviation::NZDT, 46800, true),
    Rule::new(1333202400, Abbreviation::NZST, 43200, false),
    Rule::new(1348927200, Abbreviation::NZDT, 46800, true),
    Rule::new(1365256800, Abbreviation::NZST, 43200, false),
    Rule::new(1380376800, Abbreviation::NZDT, 46800, true),
    Rule::new(1396706400, Abbreviation::NZST, 43200, false),
    Rule::new(1411826400, Abbreviation::NZDT, 46800, true),
    Rule::new(1428156000, Abbreviation::NZST, 43200, false),
    Rule::new(1443276000, Abbreviation::NZDT, 46800, true),
    Rule::new(1459605600, Abbreviation::NZST, 43200, false),
    Rule::new(1474725600, Abbreviation::NZDT, 46800, true),
    Rule::new(1491055200, Abbreviation::NZST, 43200, false),
    Rule::new(1506175200, Abbreviation::NZDT, 46800, true),
    Rule::new(1522504800, Abbreviation::NZST, 43200, false),
    Rule::new(1538229600, Abbreviation::NZDT, 46800, true),
    Rule::new(1554559200, Abbreviation::NZST, 43200, false),
    Rule::new(1569679200, Abbreviation::NZDT, 46800, true),
    Rule::new(1586008800, Abbreviation::NZST, 43200, false),
    Rule::new(1601128800, Abbreviation::NZDT, 46800, true),
    Rule::new(1617458400, Abbreviation::NZST, 43200, false),
    Rule::new(1632578400, Abbreviation::NZDT, 46800, true),
    Rule::new(1648908000, Abbreviation::NZST, 43200, false),
    Rule::new(1664028000, Abbreviation::NZDT, 46800, true),
    Rule::new(1680357600, Abbreviation::NZST, 43200, false),
    Rule::new(1695477600, Abbreviation::NZDT, 46800, true),
    Rule::new(1712412000, Abbreviation::NZST, 43200, false),
    Rule::new(1727532000, Abbreviation::NZDT, 46800, true),
    Rule::new(1743861600, Abbreviation::NZST, 43200, false),
    Rule::new(1758981600, Abbreviation::NZDT, 46800, true),
    Rule::new(1775311200, Abbreviation::NZST, 43200, false),
    Rule::new(1790431200, Abbreviation::NZDT, 46800, true),
    Rule::new(1806760800, Abbreviation::NZST, 43200, false),
    Rule::new(1821880800, Abbreviation::NZDT, 46800, true),
    Rule::new(1838210400, Abbreviation::NZST, 43200, false),
    Rule::new(1853330400, Abbreviation::NZDT, 46800, true),
    Rule::new(1869660000, Abbreviation::NZST, 43200, false),
    Rule::new(1885384800, Abbreviation::NZDT, 46800, true),
    Rule::new(1901714400, Abbreviation::NZST, 43200, false),
    Rule::new(1916834400, Abbreviation::NZDT, 46800, true),
    Rule::new(1933164000, Abbreviation::NZST, 43200, false),
    Rule::new(1948284000, Abbreviation::NZDT, 46800, true),
    Rule::new(1964613600, Abbreviation::NZST, 43200, false),
    Rule::new(1979733600, Abbreviation::NZDT, 46800, true),
    Rule::new(1996063200, Abbreviation::NZST, 43200, false),
    Rule::new(2011183200, Abbreviation::NZDT, 46800, true),
    Rule::new(2027512800, Abbreviation::NZST, 43200, false),
    Rule::new(2042632800, Abbreviation::NZDT, 46800, true),
    Rule::new(2058962400, Abbreviation::NZST, 43200, false),
    Rule::new(2074687200, Abbreviation::NZDT, 46800, true),
    Rule::new(2091016800, Abbreviation::NZST, 43200, false),
    Rule::new(2106136800, Abbreviation::NZDT, 46800, true),
    Rule::new(2122466400, Abbreviation::NZST, 43200, false),
    Rule::new(2137586400, Abbreviation::NZDT, 46800, true),
];

static RULES_PACIFIC_HONOLULU: [Rule; 8] = [
    Rule::new(-34359738367, Abbreviation::LMT, -37886, false),
    Rule::new(-2334101314, Abbreviation::HST, -37800, false),
    Rule::new(-1157283000, Abbreviation::HDT, -34200, true),
    Rule::new(-1155436200, Abbreviation::HST, -37800, false),
    Rule::new(-880198200, Abbreviation::HWT, -34200, true),
    Rule::new(-769395600, Abbreviation::HPT, -34200, true),
    Rule::new(-765376200, Abbreviation::HST, -37800, false),
    Rule::new(-712150200, Abbreviation::HST, -36000, false),
];

static RULES_UTC: [Rule; 1] = [
    Rule::new(-34359738367, Abbreviation::UTC, 0, false),
];

pub(crate) static ZONE_RULES: [(TimeZone, &[Rule]); 19] = [
    (TimeZone::America_Chicago, &RULES_AMERICA_CHICAGO),
    (TimeZone::America_Denver, &RULES_AMERICA_DENVER),
    (TimeZone::America_Los_Angeles, &RULES_AMERICA_LOS_ANGELES),
    (TimeZone::America_New_York, &RULES_AMERICA_NEW_YORK),
    (TimeZone::America_Phoenix, &RULES_AMERICA_PHOENIX),
    (TimeZone::America_Sao_Paulo, &RULES_AMERICA_SAO_PAULO),
    (TimeZone::America_St_Johns, &RULES_AMERICA_ST_JOHNS),
    (TimeZone::Asia_Kathmandu, &RULES_ASIA_KATHMANDU),
    (TimeZone::Asia_Kolkata, &RULES_ASIA_KOLKATA),
    (TimeZone::Asia_Tokyo, &RULES_ASIA_TOKYO),
    (TimeZone::Australia_Adelaide, &RULES_AUSTRALIA_ADELAIDE),
    (TimeZone::Australia_Sydney, &RULES_AUSTRALIA_SYDNEY),
    (TimeZone::Europe_Dublin, &RULES_EUROPE_DUBLIN),
    (TimeZone::Europe_London, &RULES_EUROPE_LONDON),
    (TimeZone::Europe_Paris, &RULES_EUROPE_PARIS),
    (TimeZone::Pacific_Apia, &RULES_PACIFIC_APIA),
    (TimeZone::Pacific_Auckland, &RULES_PACIFIC_AUCKLAND),
    (TimeZone::Pacific_Honolulu, &RULES_PACIFIC_HONOLULU),
    (TimeZone::UTC, &RULES_UTC),
];
